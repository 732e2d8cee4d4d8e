//! The case tree engine.
//!
//! A suite body declares its cases lazily: the children of a case are only
//! known after the case itself has been executed. The engine therefore
//! re-runs the whole suite body once for every node of the tree, each time
//! targeting a single node. Cases on the path to the target are executed,
//! the children of the target are recorded, and everything else is skipped.

mod registry;
mod run;
mod walker;

pub use self::{
    registry::Registry,
    walker::{declare_case, run_suite},
};

use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
