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
