#[cfg(test)]
arbor::test_harness!();
