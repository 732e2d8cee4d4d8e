use thiserror::Error;

/// Errors detected while declaring test cases.
///
/// Every variant indicates a defect in the test code itself, such as a case
/// declared conditionally or two sibling cases sharing a name. None of them
/// are recoverable; the run context that observed the error is aborted.
#[allow(missing_docs)]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaseError {
    /// A case was declared through a run context that is no longer running.
    #[error("attempted to register case {name:?} for terminated test {test:?}")]
    Terminated { name: String, test: String },

    /// Two sibling cases were declared with the same name.
    #[error("duplicate test case {0:?}")]
    DuplicateCase(String),

    /// A replay declared more cases at a depth than were first recorded.
    #[error("unexpected extra case {0:?}")]
    ExtraCase(String),

    /// A replay declared a different name at an already recorded index.
    #[error("case name at index {index} changed; first {recorded:?} then {name:?}")]
    NameChanged {
        index: usize,
        recorded: String,
        name: String,
    },

    /// A replay declared fewer cases at a depth than were first recorded.
    #[error("missing test case callbacks; expected {expected} but got {seen}")]
    MissingCallbacks { expected: usize, seen: usize },

    /// A case was declared with an empty name.
    #[error("test case name must not be empty")]
    EmptyName,

    /// A second run was started for a context that already has an active one.
    #[error("test {0:?} is already running a suite")]
    AlreadyActive(String),
}
