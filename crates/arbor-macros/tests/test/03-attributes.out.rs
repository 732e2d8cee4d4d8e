#[allow(non_upper_case_globals)]
const attributes: & path::to::arbor::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use path::to::arbor::_test_reexports as __arbor;

    #[allow(missing_docs)]
    fn attributes(suite: &Suite) {
        suite.case("with unused variable", || {
            #[allow(unused_variables)]
            let foo = 10;
        });
    }

    &__arbor::TestCase {
        desc: __arbor::TestDesc {
            name: __arbor::test_name!(attributes),
            location: __arbor::location!(),
        },
        test_fn: __arbor::test_fn!(attributes),
    }
};

path::to::arbor::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_attributes: & path::to::arbor::_test_reexports::TestCase = attributes;
}
