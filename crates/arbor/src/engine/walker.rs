use super::{
    lock,
    registry::{ActiveRun, Registry},
    run::{Frame, RunState},
};
use crate::{error::CaseError, host::Host};
use std::sync::{Arc, Mutex};

type SuiteFn<'a, H> = dyn Fn(&H) -> anyhow::Result<()> + Sync + 'a;

/// Run a suite body, spawning one child context per declared case.
///
/// The body is executed once in `host` without entering any case, then once
/// more inside a fresh child context for every case it declares, recursively.
/// Each execution replays the body from the start, so the setup and teardown
/// code surrounding a case runs again for each of its descendants.
pub fn run_suite<H, F>(registry: &Registry, host: &H, body: F)
where
    H: Host,
    F: Fn(&H) -> anyhow::Result<()> + Sync,
{
    Walker {
        registry,
        root: &body,
        path: vec![],
        case_names: vec![],
    }
    .run(host);
}

/// Declare a case within the case currently executing in `host`.
///
/// The callback is invoked synchronously when the case lies on the path
/// being targeted by the current run and skipped otherwise.
///
/// # Panics
/// This function panics if no suite is running for `host`, for example when
/// the context handle escaped from the run that owned it.
pub fn declare_case<H, F>(registry: &Registry, host: &H, name: &str, f: F)
where
    H: Host,
    F: FnOnce(),
{
    let run = match registry.lookup(host.id()) {
        Some(run) => run,
        None => panic!(
            "{}",
            CaseError::Terminated {
                name: name.to_owned(),
                test: host.name().to_owned(),
            }
        ),
    };

    let entered = lock(&run).enter(name);
    let frame = match entered {
        Ok(Some(frame)) => frame,
        Ok(None) => return,
        Err(err) => host.fatal(err.into()),
    };

    log::trace!("{}: entering case {:?}", host.name(), name);
    let case = EnteredCase {
        run: &run,
        frame: Some(frame),
    };
    f();

    if let Err(err) = case.leave() {
        host.fatal(err.into());
    }
}

/// Pops the frame of an entered case, also when its callback unwinds.
struct EnteredCase<'a> {
    run: &'a ActiveRun,
    frame: Option<Frame>,
}

impl EnteredCase<'_> {
    fn leave(mut self) -> Result<(), CaseError> {
        match self.frame.take() {
            Some(frame) => lock(self.run).leave(frame),
            None => Ok(()),
        }
    }
}

impl Drop for EnteredCase<'_> {
    fn drop(&mut self) {
        if let Some(frame) = self.frame.take() {
            lock(self.run).abandon(frame);
        }
    }
}

struct Walker<'a, H> {
    registry: &'a Registry,
    root: &'a SuiteFn<'a, H>,
    path: Vec<usize>,
    case_names: Vec<Arc<[String]>>,
}

impl<H> Walker<'_, H>
where
    H: Host,
{
    fn run(&self, host: &H) {
        let names = self.run_self(host);
        self.run_children(host, names);
    }

    fn run_self(&self, host: &H) -> Vec<String> {
        log::debug!("{}: running suite (path = {:?})", host.name(), self.path);

        let run = Arc::new(Mutex::new(RunState::new(&self.path, &self.case_names)));
        let result = {
            let _activation = match self.registry.activate(host.id(), host.name(), run.clone())
            {
                Ok(activation) => activation,
                Err(err) => host.fatal(err.into()),
            };
            (self.root)(host)
        };
        if let Err(err) = result {
            host.fatal(err);
        }

        let mut run = lock(&run);
        if let Err(err) = run.finish() {
            host.fatal(err.into());
        }
        run.take_new_names()
    }

    fn run_children(&self, host: &H, names: Vec<String>) {
        if names.is_empty() {
            return;
        }
        log::debug!("{}: found {} case(s)", host.name(), names.len());

        let names: Arc<[String]> = names.into();
        for (index, name) in names.iter().enumerate() {
            let passed = host.subtest(name, &|child: &H| {
                let mut path = self.path.clone();
                path.push(index);
                let mut case_names = self.case_names.clone();
                case_names.push(names.clone());

                Walker {
                    registry: self.registry,
                    root: self.root,
                    path,
                    case_names,
                }
                .run(child);
            });
            log::trace!(
                "{}: case {:?} {}",
                host.name(),
                name,
                if passed { "passed" } else { "failed" }
            );
        }
    }
}
