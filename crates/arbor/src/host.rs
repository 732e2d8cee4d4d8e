//! The interface between the case engine and the test runner hosting it.

use std::fmt;

/// The identity of a run context.
///
/// Two handles referring to the same running test compare equal. The engine
/// never creates these values itself; it only receives them from a [`Host`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Create a context identity from a raw value chosen by the host.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A run context provided by the test runner.
///
/// The engine drives the case tree exclusively through this trait, so it can
/// be hosted by any runner that supports named child tests reported
/// independently from each other.
pub trait Host: Sized {
    /// Return the identity of this run context.
    fn id(&self) -> ContextId;

    /// Return the human readable name of this run context.
    fn name(&self) -> &str;

    /// Run `f` inside a new child context named `name`.
    ///
    /// The child is reported independently from its parent. The return value
    /// indicates whether the child passed. A failure inside the child must not
    /// abort the calling context.
    fn subtest(&self, name: &str, f: &(dyn Fn(&Self) + Sync)) -> bool;

    /// Mark this context as failed and terminate its execution immediately.
    fn fatal(&self, err: anyhow::Error) -> !;
}
