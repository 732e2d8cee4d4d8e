#![cfg(feature = "harness")]

use crate::{
    cli::{Args, ExitStatus},
    reporter::ConsoleReporter,
    session::Session,
    test::TestCase,
};
use linkme::distributed_slice;

#[doc(hidden)]
#[distributed_slice]
pub static TEST_CASES: [&'static TestCase] = [..];

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_case_harness {
    ( $item:item ) => {
        #[$crate::_test_harness_reexports::distributed_slice(
            $crate::_test_harness_reexports::TEST_CASES
        )]
        #[linkme(crate = $crate::_test_harness_reexports::linkme)]
        $item
    };
}

#[doc(hidden)]
pub fn main() {
    let args = match Args::from_env() {
        Ok(args) => args,
        Err(status) => status.exit(),
    };

    let mut session = Session::new(&args, ConsoleReporter::new(&args));
    let status = if args.list_tests {
        match session.list(&*TEST_CASES) {
            Ok(()) => ExitStatus::OK,
            Err(err) => {
                eprintln!("error: {:#}", err);
                ExitStatus::FAILED
            }
        }
    } else {
        match session.run(&*TEST_CASES) {
            Ok(summary) if summary.is_passed() => ExitStatus::OK,
            Ok(..) => ExitStatus::FAILED,
            Err(err) => {
                eprintln!("error: {:#}", err);
                ExitStatus::FAILED
            }
        }
    };

    status.exit();
}

/// Generate the main function for running the test binary.
///
/// The generated binary runs all the tests defined with `#[arbor::test]`
/// in the same target. The target must be declared with `harness = false`.
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}
