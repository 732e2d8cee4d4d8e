#[arbor(crate = path::to::arbor)]
#[allow(missing_docs)]
fn attributes(suite: &Suite) {
    suite.case("with unused variable", || {
        #[allow(unused_variables)]
        let foo = 10;
    });
}
