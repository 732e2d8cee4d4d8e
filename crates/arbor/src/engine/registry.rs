use super::{lock, run::RunState};
use crate::{error::CaseError, host::ContextId};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

pub(crate) type ActiveRun = Arc<Mutex<RunState>>;

/// The association between running contexts and their active run.
///
/// A registry is shared by every context spawned by one top-level traversal.
/// Each context only ever touches its own slot, but sibling contexts may be
/// run on different threads by the host.
#[derive(Default)]
pub struct Registry {
    active: Mutex<HashMap<ContextId, ActiveRun>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn activate(
        &self,
        id: ContextId,
        name: &str,
        run: ActiveRun,
    ) -> Result<Activation<'_>, CaseError> {
        let mut active = lock(&self.active);
        if active.contains_key(&id) {
            return Err(CaseError::AlreadyActive(name.to_owned()));
        }
        active.insert(id, run);
        Ok(Activation { registry: self, id })
    }

    pub(crate) fn lookup(&self, id: ContextId) -> Option<ActiveRun> {
        lock(&self.active).get(&id).cloned()
    }

    fn deactivate(&self, id: ContextId) {
        lock(&self.active).remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        lock(&self.active).is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("active", &lock(&self.active).keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Removes the registration when dropped, including while unwinding.
#[must_use]
pub(crate) struct Activation<'a> {
    registry: &'a Registry,
    id: ContextId,
}

impl Drop for Activation<'_> {
    fn drop(&mut self) {
        self.registry.deactivate(self.id);
    }
}
