#[allow(non_upper_case_globals)]
const return_result: & ::arbor::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::arbor::_test_reexports as __arbor;

    fn return_result(suite: &Suite) -> std::io::Result<()>
    where
        std::io::Result<()>: __arbor::Termination
    {
        suite.case("opening a missing file", || {
            assert!(std::fs::File::open("/no/such/file").is_err());
        });
        Ok(())
    }

    &__arbor::TestCase {
        desc: __arbor::TestDesc {
            name: __arbor::test_name!(return_result),
            location: __arbor::location!(),
        },
        test_fn: __arbor::test_fn!(return_result),
    }
};

::arbor::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_return_result: & ::arbor::_test_reexports::TestCase = return_result;
}
