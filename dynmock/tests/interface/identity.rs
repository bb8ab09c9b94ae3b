use std::collections::HashSet;

use dynmock::{action::return_value, mock, AsProxy, Mockery, ToValue, Value};

pub trait Reader {
    fn read(&self) -> String;
}

pub trait Writer {
    fn write(&self, text: &str);
}

mock! {
    pub struct MockFile;

    impl Reader for MockFile {
        fn read(&self) -> String;
    }

    impl Writer for MockFile {
        fn write(&self, text: &str);
    }
}

#[test]
fn clones_share_the_identity() {
    let mockery = Mockery::new();
    let a = mockery.create_mock::<MockFile>().unwrap();
    let b = mockery.create_mock::<MockFile>().unwrap();
    let c = a.clone();

    assert_eq!(a, c);
    assert_ne!(a, b);

    let set = [a.clone(), b.clone(), c.clone()].into_iter().collect::<HashSet<_>>();
    assert_eq!(set.len(), 2);

    assert_eq!(a.to_value(), Value::Mock(c.proxy().mock().clone()));
    assert!(format!("{a:?}").starts_with("MockFile(MockRef(reader#"));
}

#[test]
fn one_mock_implements_many_traits() {
    let mockery = Mockery::new();
    let file = mockery.mock::<MockFile>().named("config").build().unwrap();

    mockery
        .expect(1)
        .on(&file)
        .method(MockFile::READ)
        .unwrap()
        .will(return_value("content"));
    mockery
        .expect(1)
        .on(&file)
        .method(MockFile::WRITE)
        .unwrap()
        .with("more");

    assert_eq!(file.to_string(), "config");
    assert_eq!(file.read(), "content");
    file.write("more");

    assert_eq!(MockFile::WRITE.to_string(), "Writer::write");
    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn expectations_are_verified_per_mock() {
    let mockery = Mockery::new();
    let a = mockery.mock::<MockFile>().named("a").build().unwrap();
    let b = mockery.mock::<MockFile>().named("b").build().unwrap();

    mockery.expect(1).on(&a).method(MockFile::WRITE).unwrap();
    mockery.expect(1).on(&b).method(MockFile::WRITE).unwrap();

    a.write("x");

    assert_eq!(mockery.expectations_of(&a).len(), 1);
    mockery.verify_expectations_of(&a).unwrap();

    let err = mockery.verify_expectations_of(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "not all expected invocations of b were performed\nExpected:\n  1 time: b.write(any arguments) [called 0 times]\n"
    );

    mockery.release();
}
