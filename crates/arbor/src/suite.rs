use crate::{
    engine::{self, Registry},
    host::{ContextId, Host},
    report::{Outcome, Reporter, TestCaseSummary},
    test::Location,
};
use maybe_unwind::maybe_unwind;
use std::{
    fmt, mem,
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

type DynReporter = dyn Reporter + Send + Sync;

/// The handle of a running test context.
///
/// A `Suite` is passed to every test function and is used to declare the
/// nested cases of the test:
///
/// ```
/// # fn test(suite: &arbor::Suite) {
/// let mut vec = vec![0usize; 5];
///
/// suite.case("resizing bigger changes size and capacity", || {
///     vec.resize(10, 0);
///     assert_eq!(vec.len(), 10);
/// });
/// # }
/// ```
///
/// The test function is re-run from the start for every case, so the code
/// around a case is executed again as its setup and teardown. Each run only
/// enters the cases leading to the single case it targets.
///
/// The handle is cheap to clone. Using a clone after the test it belongs to
/// has finished is a programming error and causes a panic.
#[derive(Clone)]
pub struct Suite {
    inner: Arc<Inner>,
}

struct Inner {
    id: ContextId,
    name: String,
    case_name: String,
    registry: Arc<Registry>,
    reporter: Arc<DynReporter>,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    failure: Option<Failure>,
    children: Vec<TestCaseSummary>,
}

struct Failure {
    location: Option<&'static Location>,
    reason: anyhow::Error,
}

/// The payload of the unwinding started by an aborted context.
struct Aborted;

fn next_context_id() -> ContextId {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    ContextId::new(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

impl Suite {
    pub(crate) fn root(name: &str, reporter: Arc<DynReporter>) -> Self {
        Self::new(name.into(), name.into(), Arc::new(Registry::new()), reporter)
    }

    fn new(
        name: String,
        case_name: String,
        registry: Arc<Registry>,
        reporter: Arc<DynReporter>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: next_context_id(),
                name,
                case_name,
                registry,
                reporter,
                state: Mutex::default(),
            }),
        }
    }

    fn child(&self, case_name: &str) -> Self {
        Self::new(
            format!("{}/{}", self.inner.name, case_name),
            case_name.into(),
            self.inner.registry.clone(),
            self.inner.reporter.clone(),
        )
    }

    /// Return the full name of this context.
    ///
    /// The name of a nested case is prefixed with the names of its ancestors,
    /// separated by `/`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declare a nested case.
    ///
    /// `f` is only called during the runs targeting this case or one of
    /// its descendants. The name must not be empty and must be unique among
    /// the cases declared by the same parent.
    pub fn case<F>(&self, name: &str, f: F)
    where
        F: FnOnce(),
    {
        engine::declare_case(&self.inner.registry, self, name, f)
    }

    #[doc(hidden)] // private API
    #[inline(never)]
    pub fn fail(&self, location: &'static Location, reason: fmt::Arguments<'_>) -> ! {
        self.abort(Some(location), anyhow::anyhow!("{}", reason))
    }

    fn abort(&self, location: Option<&'static Location>, reason: anyhow::Error) -> ! {
        {
            let mut state = self.state();
            if state.failure.is_none() {
                state.failure = Some(Failure { location, reason });
            }
        }
        panic::resume_unwind(Box::new(Aborted))
    }

    fn state(&self) -> MutexGuard<'_, State> {
        engine::lock(&self.inner.state)
    }

    /// Run the whole suite body in this context.
    pub(crate) fn run_suite<F>(self, body: F) -> TestCaseSummary
    where
        F: Fn(&Suite) -> anyhow::Result<()> + Sync,
    {
        let registry = self.inner.registry.clone();
        self.run(|suite| engine::run_suite(&registry, suite, &body))
    }

    fn run<F>(self, f: F) -> TestCaseSummary
    where
        F: FnOnce(&Suite),
    {
        self.inner.reporter.test_case_starting(self.name());

        let result = maybe_unwind(AssertUnwindSafe(|| f(&self)));

        let State { failure, children } = mem::take(&mut *self.state());
        let outcome = match (failure, result) {
            (Some(Failure { location, reason }), _) => Outcome::Failed { location, reason },
            (None, Err(unwind)) => Outcome::Panicked(unwind),
            (None, Ok(())) => Outcome::Passed,
        };
        let summary = TestCaseSummary {
            name: self.inner.name.clone(),
            case_name: self.inner.case_name.clone(),
            outcome,
            children,
        };

        self.inner.reporter.test_case_ended(&summary);
        summary
    }
}

impl Host for Suite {
    #[inline]
    fn id(&self) -> ContextId {
        self.inner.id
    }

    #[inline]
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn subtest(&self, name: &str, f: &(dyn Fn(&Self) + Sync)) -> bool {
        let summary = self.child(name).run(|child| f(child));
        let passed = summary.is_passed();
        self.state().children.push(summary);
        passed
    }

    fn fatal(&self, err: anyhow::Error) -> ! {
        self.abort(None, err)
    }
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}
