use crate::{
    report::{Outcome, Reporter, Summary, TestCaseSummary},
    test::TestCase,
};

/// A reporter that emits the progress through the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(clippy::new_without_default)]
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, tests: &[&TestCase]) {
        let suffix = match tests.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} test{}", tests.len(), suffix);
    }

    fn test_run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test status: ok");
        } else {
            log::error!("test status: FAILED");
        }
    }

    fn test_case_starting(&self, name: &str) {
        log::info!("start: {}", name);
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        match summary.outcome() {
            Outcome::Passed if summary.is_passed() => log::info!("{}: ok", summary.name()),
            Outcome::Passed => log::error!("{}: FAILED (in nested cases)", summary.name()),
            outcome => log::error!("{}: FAILED: {}", summary.name(), outcome),
        }
    }
}
