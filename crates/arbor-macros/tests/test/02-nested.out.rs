#[allow(non_upper_case_globals)]
const case_nested: & ::arbor::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::arbor::_test_reexports as __arbor;

    fn case_nested(suite: &Suite) {
        let mut vec = vec![0usize; 5];

        suite.case("resizing bigger changes size and capacity", || {
            vec.resize(10, 0);

            suite.case("shrinking smaller does not change capacity", || {
                vec.resize(0, 0);
                assert!(vec.capacity() >= 10);
            });
        });
    }

    &__arbor::TestCase {
        desc: __arbor::TestDesc {
            name: __arbor::test_name!(case_nested),
            location: __arbor::location!(),
        },
        test_fn: __arbor::test_fn!(case_nested),
    }
};

::arbor::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_case_nested: & ::arbor::_test_reexports::TestCase = case_nested;
}
