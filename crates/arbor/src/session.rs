use crate::{
    cli::Args,
    report::{Outcome, Reporter, Summary, TestCaseSummary},
    suite::Suite,
    test::{TestCase, TestDesc},
};
use futures_channel::oneshot;
use futures_executor::{block_on, ThreadPool};
use futures_util::future::join_all;
use maybe_unwind::capture_panic_info;
use std::{
    collections::HashSet,
    panic,
    sync::{Arc, Once},
};

type DynReporter = dyn Reporter + Send + Sync;

/// A test session.
///
/// The session runs each top-level test on a thread pool. The cases nested
/// in a test are run one after another on the thread of the test that
/// declares them.
pub struct Session<'a> {
    args: &'a Args,
    reporter: Arc<DynReporter>,
}

impl<'a> Session<'a> {
    /// Create a new session reporting the progress to `reporter`.
    pub fn new<R>(args: &'a Args, reporter: R) -> Self
    where
        R: Reporter + Send + Sync + 'static,
    {
        Self {
            args,
            reporter: Arc::new(reporter),
        }
    }

    /// Print the names of the tests that would be run.
    pub fn list(&self, tests: &[&'static TestCase]) -> anyhow::Result<()> {
        let (tests, _) = self.select(tests)?;

        for test in &tests {
            println!("{}: test", test.desc().name());
        }

        let suffix = match tests.len() {
            1 => "",
            _ => "s",
        };
        if !tests.is_empty() {
            println!();
        }
        println!("{} test{}", tests.len(), suffix);

        Ok(())
    }

    /// Run the tests not excluded by the filter options.
    pub fn run(&mut self, tests: &[&'static TestCase]) -> anyhow::Result<Summary> {
        install_panic_hook();

        let (tests, filtered_out) = self.select(tests)?;

        let mut builder = ThreadPool::builder();
        builder.name_prefix("arbor-test-");
        if let Some(n) = self.args.test_threads {
            builder.pool_size(n.get());
        }
        let pool = builder.create()?;

        self.reporter.test_run_starting(&tests[..]);

        let mut receivers = vec![];
        for &test in &tests {
            let (tx, rx) = oneshot::channel();
            let reporter = self.reporter.clone();
            pool.spawn_ok(async move {
                let name = test.desc().name();
                let summary = Suite::root(name, reporter).run_suite(test.test_fn);
                let _ = tx.send(summary);
            });
            receivers.push(rx);
        }

        let mut summary = Summary::default();
        summary.filtered_out.extend(filtered_out);
        for (test, result) in tests.iter().zip(block_on(join_all(receivers))) {
            let result = result.unwrap_or_else(|_| {
                let name = test.desc().name();
                log::error!("the thread running {} terminated unexpectedly", name);
                TestCaseSummary {
                    name: name.into(),
                    case_name: name.into(),
                    outcome: Outcome::Failed {
                        location: None,
                        reason: anyhow::anyhow!("the test thread terminated unexpectedly"),
                    },
                    children: vec![],
                }
            });
            summary.append(result);
        }

        self.reporter.test_run_ended(&summary);

        Ok(summary)
    }

    /// Run a single suite body on the current thread.
    ///
    /// The body is re-run once for each case it declares, and the outcome of
    /// every case is collected into the returned summary.
    pub fn run_suite<F>(&self, name: &str, body: F) -> TestCaseSummary
    where
        F: Fn(&Suite) -> anyhow::Result<()> + Sync,
    {
        install_panic_hook();
        Suite::root(name, self.reporter.clone()).run_suite(body)
    }

    #[allow(clippy::type_complexity)]
    fn select(
        &self,
        tests: &[&'static TestCase],
    ) -> anyhow::Result<(Vec<&'static TestCase>, Vec<&'static TestDesc>)> {
        let mut selected = vec![];
        let mut filtered_out = vec![];
        let mut unique_names = HashSet::new();
        for &test in tests {
            let desc = test.desc();
            anyhow::ensure!(
                unique_names.insert(desc.name()),
                "the test name '{}' is conflicted",
                desc.name()
            );

            if self.args.is_filtered_out(desc.name()) {
                filtered_out.push(desc);
            } else {
                selected.push(test);
            }
        }

        selected.sort_by(|t1, t2| t1.desc().name().cmp(t2.desc().name()));

        Ok((selected, filtered_out))
    }
}

fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}
