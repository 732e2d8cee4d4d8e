/*!
Nested test cases discovered at run time.

A test declares its cases while it runs, and the cases may declare further
cases in turn. The test body is replayed from the start once for every case
in the resulting tree, so each case runs in a fresh environment set up by the
code surrounding it, and is reported as a separate child test.

```
# use arbor::Suite;
#[arbor::test]
fn vec_can_be_resized(suite: &Suite) {
    let mut vec = vec![0usize; 5];
    assert_eq!(vec.len(), 5);

    suite.case("resizing bigger changes size and capacity", || {
        vec.resize(10, 0);
        assert_eq!(vec.len(), 10);
        assert!(vec.capacity() >= 10);
    });

    suite.case("resizing smaller changes size but not capacity", || {
        vec.resize(0, 0);
        assert_eq!(vec.len(), 0);
        assert!(vec.capacity() >= 5);
    });
}
# fn main() {}
```

The case engine in [`engine`] is independent from the runner shipped with
this crate and can be hosted by any type implementing [`Host`].
!*/

#![doc(html_root_url = "https://docs.rs/arbor/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;

pub mod cli;
pub mod engine;
mod error;
mod harness;
mod host;
mod report;
pub mod reporter;
mod session;
mod suite;
mod termination;

pub use crate::{
    error::CaseError,
    host::{ContextId, Host},
    report::{Outcome, Reporter, Summary, TestCaseSummary},
    session::Session,
    suite::Suite,
    termination::Termination,
    test::{Location, TestCase, TestDesc},
};

/// Generate a test function whose cases are run as separate child tests.
pub use arbor_macros::test;

hidden_item! {
    /// Re-exported items for #[test]
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            __test_fn as test_fn,
            __test_name as test_name,
            suite::Suite,
            termination::Termination,
            test::{Location, TestCase, TestDesc, TestFn, TestName},
        };
        pub use std::{column, concat, file, format_args, line, module_path, stringify};
    }

    /// Re-exported items for test_harness!() and __test_case_harness!()
    #[cfg(feature = "harness")]
    pub mod _test_harness_reexports {
        pub use {
            crate::harness::{TEST_CASES, main},
            linkme::{self, distributed_slice},
        };
    }
}
