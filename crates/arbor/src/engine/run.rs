use crate::error::CaseError;
use std::{collections::HashSet, mem, sync::Arc};

/// Bookkeeping for a single execution of the suite body.
///
/// `path` selects the node being targeted and `case_names` holds the sibling
/// names recorded at every depth along that path by earlier runs. Cases below
/// the target are only recorded, never executed.
#[derive(Debug)]
pub(crate) struct RunState {
    path: Vec<usize>,
    case_names: Vec<Arc<[String]>>,
    current_path: Vec<usize>,
    new_names: Vec<String>,
    new_names_seen: HashSet<String>,
}

/// A case on the target path whose callback is about to run.
#[derive(Debug)]
#[must_use]
pub(crate) struct Frame {
    depth: usize,
}

impl RunState {
    pub(crate) fn new(path: &[usize], case_names: &[Arc<[String]>]) -> Self {
        debug_assert_eq!(path.len(), case_names.len());
        let mut current_path = Vec::with_capacity(path.len() + 1);
        current_path.push(0);
        Self {
            path: path.to_vec(),
            case_names: case_names.to_vec(),
            current_path,
            new_names: vec![],
            new_names_seen: HashSet::new(),
        }
    }

    fn depth(&self) -> usize {
        self.current_path.len() - 1
    }

    /// Process the declaration of a case.
    ///
    /// Returns a frame when the callback of the case has to be executed.
    pub(crate) fn enter(&mut self, name: &str) -> Result<Option<Frame>, CaseError> {
        if name.is_empty() {
            return Err(CaseError::EmptyName);
        }

        // Past the end of the target path, we are inside the targeted case
        // itself. Its children are recorded without running them.
        let depth = self.depth();
        if depth >= self.path.len() {
            self.record_new_case(name)?;
            return Ok(None);
        }

        let index = self.current_path[depth];
        self.check_seen_case(depth, index, name)?;

        let is_target = index == self.path[depth];
        self.current_path[depth] += 1;
        if !is_target {
            return Ok(None);
        }

        self.current_path.push(0);
        Ok(Some(Frame { depth }))
    }

    /// Leave the case entered with `frame` after its callback returned.
    pub(crate) fn leave(&mut self, frame: Frame) -> Result<(), CaseError> {
        let depth = frame.depth + 1;
        debug_assert_eq!(depth, self.depth());
        let seen = self.current_path[depth];
        self.current_path.truncate(depth);
        self.check_seen_children(depth, seen)
    }

    /// Return to the depth of the case entered with `frame` after its
    /// callback unwound, skipping the check of its children.
    pub(crate) fn abandon(&mut self, frame: Frame) {
        self.current_path.truncate(frame.depth + 1);
    }

    /// Check that the suite body declared every recorded top-level case.
    pub(crate) fn finish(&self) -> Result<(), CaseError> {
        debug_assert_eq!(self.depth(), 0);
        self.check_seen_children(0, self.current_path[0])
    }

    /// Take the names of the cases found below the target, in declaration order.
    pub(crate) fn take_new_names(&mut self) -> Vec<String> {
        mem::take(&mut self.new_names)
    }

    fn record_new_case(&mut self, name: &str) -> Result<(), CaseError> {
        if !self.new_names_seen.insert(name.to_owned()) {
            return Err(CaseError::DuplicateCase(name.to_owned()));
        }
        self.new_names.push(name.to_owned());
        Ok(())
    }

    fn check_seen_case(&self, depth: usize, index: usize, name: &str) -> Result<(), CaseError> {
        let recorded = self.case_names[depth]
            .get(index)
            .ok_or_else(|| CaseError::ExtraCase(name.to_owned()))?;
        if recorded != name {
            return Err(CaseError::NameChanged {
                index,
                recorded: recorded.clone(),
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn check_seen_children(&self, depth: usize, seen: usize) -> Result<(), CaseError> {
        match self.case_names.get(depth) {
            Some(names) if seen < names.len() => Err(CaseError::MissingCallbacks {
                expected: names.len(),
                seen,
            }),
            _ => Ok(()),
        }
    }
}
