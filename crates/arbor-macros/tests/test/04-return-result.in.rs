fn return_result(suite: &Suite) -> std::io::Result<()> {
    suite.case("opening a missing file", || {
        assert!(std::fs::File::open("/no/such/file").is_err());
    });
    Ok(())
}
