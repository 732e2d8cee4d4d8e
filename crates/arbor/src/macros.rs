macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Mark the current test context as failed and then terminate its execution.
///
/// The remaining code of the context, including the code following the
/// enclosing cases, is not executed. Sibling cases are still run.
#[macro_export]
macro_rules! fail {
    ($suite:expr) => {
        $crate::fail!($suite, "explicitly failed")
    };
    ($suite:expr, $($arg:tt)+) => {{
        use $crate::_test_reexports as __arbor;
        const LOCATION: __arbor::Location = __arbor::location!();
        $suite.fail(&LOCATION, __arbor::format_args!($($arg)+))
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_name {
    ($name:ident) => {{
        use $crate::_test_reexports as __arbor;
        __arbor::TestName {
            raw: __arbor::concat!(__arbor::module_path!(), "::", __arbor::stringify!($name)),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_fn {
    ($path:path) => {{
        use $crate::_test_reexports as __arbor;
        |suite: &__arbor::Suite| __arbor::Termination::into_result($path(suite))
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __arbor;
        __arbor::Location {
            file: __arbor::file!(),
            line: __arbor::line!(),
            column: __arbor::column!(),
        }
    }};
}

#[doc(hidden)] // private API
#[cfg(feature = "harness")]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        $crate::__test_case_harness! { $item }
    };
}

#[doc(hidden)] // private API
#[cfg(not(feature = "harness"))]
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {};
}
