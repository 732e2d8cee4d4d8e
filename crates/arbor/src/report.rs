use crate::test::{Location, TestCase, TestDesc};
use maybe_unwind::Unwind;
use std::fmt;

/// The result of running a single test context.
#[derive(Debug)]
#[non_exhaustive]
pub enum Outcome {
    /// The context ran to completion.
    Passed,

    /// The context was aborted, either explicitly or because the test code
    /// returned an error or declared its cases inconsistently.
    Failed {
        /// The location of the explicit failure, if any.
        location: Option<&'static Location>,
        /// The reason of the failure.
        reason: anyhow::Error,
    },

    /// The test code panicked.
    Panicked(Unwind),
}

impl Outcome {
    /// Return whether the context passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => f.write_str("passed"),
            Outcome::Failed {
                location: Some(location),
                reason,
            } => write!(f, "{:#} at {}", reason, location),
            Outcome::Failed {
                location: None,
                reason,
            } => write!(f, "{:#}", reason),
            Outcome::Panicked(unwind) => write!(f, "{}", unwind),
        }
    }
}

/// The results of a test context and all the cases run beneath it.
#[derive(Debug)]
pub struct TestCaseSummary {
    pub(crate) name: String,
    pub(crate) case_name: String,
    pub(crate) outcome: Outcome,
    pub(crate) children: Vec<TestCaseSummary>,
}

impl TestCaseSummary {
    /// Return the full name of the context, with case names separated by `/`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the outcome of the context itself, regardless of its children.
    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Return the summaries of the cases run as children of this context.
    #[inline]
    pub fn children(&self) -> &[TestCaseSummary] {
        &self.children
    }

    /// Return whether this context and all of its descendants passed.
    pub fn is_passed(&self) -> bool {
        self.outcome.is_passed() && self.children.iter().all(TestCaseSummary::is_passed)
    }

    /// Find a descendant by the case names leading to it.
    pub fn find(&self, path: &[&str]) -> Option<&TestCaseSummary> {
        path.iter().try_fold(self, |summary, &name| {
            summary
                .children
                .iter()
                .find(|child| child.case_name == name)
        })
    }

    /// Return the contexts in this tree whose own outcome is not a pass, in
    /// the order they were started.
    pub fn failures(&self) -> Vec<&TestCaseSummary> {
        let mut failures = vec![];
        self.collect_failures(&mut failures);
        failures
    }

    fn collect_failures<'a>(&'a self, failures: &mut Vec<&'a TestCaseSummary>) {
        if !self.outcome.is_passed() {
            failures.push(self);
        }
        for child in &self.children {
            child.collect_failures(failures);
        }
    }
}

/// The results of a whole test run.
#[derive(Debug, Default)]
pub struct Summary {
    pub(crate) passed: Vec<TestCaseSummary>,
    pub(crate) failed: Vec<TestCaseSummary>,
    pub(crate) filtered_out: Vec<&'static TestDesc>,
}

impl Summary {
    /// Return whether all executed tests passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Return the summaries of the tests that passed.
    #[inline]
    pub fn passed(&self) -> &[TestCaseSummary] {
        &self.passed
    }

    /// Return the summaries of the tests that failed.
    #[inline]
    pub fn failed(&self) -> &[TestCaseSummary] {
        &self.failed
    }

    /// Return the tests excluded by the filter options.
    #[inline]
    pub fn filtered_out(&self) -> &[&'static TestDesc] {
        &self.filtered_out
    }

    pub(crate) fn append(&mut self, result: TestCaseSummary) {
        if result.is_passed() {
            self.passed.push(result);
        } else {
            self.failed.push(result);
        }
    }
}

/// The receiver of test progress notifications.
///
/// The methods may be called concurrently from the threads running
/// independent test cases.
pub trait Reporter {
    /// Called once before any test starts.
    fn test_run_starting(&self, tests: &[&TestCase]);

    /// Called once after all tests have finished.
    fn test_run_ended(&self, summary: &Summary);

    /// Called when a test context, or a case nested in it, starts.
    fn test_case_starting(&self, name: &str);

    /// Called when a test context, or a case nested in it, finishes.
    fn test_case_ended(&self, summary: &TestCaseSummary);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, tests: &[&TestCase]) {
            (**self).test_run_starting(tests)
        }

        fn test_run_ended(&self, summary: &Summary) {
            (**self).test_run_ended(summary)
        }

        fn test_case_starting(&self, name: &str) {
            (**self).test_case_starting(name)
        }

        fn test_case_ended(&self, summary: &TestCaseSummary) {
            (**self).test_case_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
