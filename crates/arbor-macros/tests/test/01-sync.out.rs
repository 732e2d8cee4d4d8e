#[allow(non_upper_case_globals)]
const case_sync: & ::arbor::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::arbor::_test_reexports as __arbor;

    fn case_sync(suite: &Suite) {
        let mut vec = vec![0usize; 5];
        assert_eq!(vec.len(), 5);
        assert!(vec.capacity() >= 5);

        suite.case("resizing bigger changes size and capacity", || {
            vec.resize(10, 0);
            assert_eq!(vec.len(), 10);
            assert!(vec.capacity() >= 5);
        });
    }

    &__arbor::TestCase {
        desc: __arbor::TestDesc {
            name: __arbor::test_name!(case_sync),
            location: __arbor::location!(),
        },
        test_fn: __arbor::test_fn!(case_sync),
    }
};

::arbor::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_case_sync: & ::arbor::_test_reexports::TestCase = case_sync;
}
