use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{
    action::{return_value, throw},
    mock, Fault, Mockery, ToValue,
};

#[derive(Debug, PartialEq)]
pub struct StoreError(String);

impl From<Fault> for StoreError {
    fn from(fault: Fault) -> Self {
        Self(fault.message().into())
    }
}

pub trait Store {
    fn load(&self, key: &str) -> Result<String, StoreError>;
    fn size(&self) -> usize;
}

mock! {
    pub struct MockStore;

    impl Store for MockStore {
        fn load(&self, key: &str) -> Result<String, StoreError>;
        fn size(&self) -> usize;
    }
}

#[test]
fn fault_is_returned_as_error() {
    let mockery = Mockery::new();
    let store = mockery.create_mock::<MockStore>().unwrap();

    mockery
        .expect(1)
        .on(&store)
        .method(MockStore::LOAD)
        .unwrap()
        .with("a")
        .will(return_value("alpha"));
    mockery
        .expect(1)
        .on(&store)
        .method(MockStore::LOAD)
        .unwrap()
        .with("b")
        .will(throw("not found"));

    assert_eq!(store.load("a"), Ok("alpha".to_owned()));
    assert_eq!(store.load("b"), Err(StoreError("not found".into())));

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn fault_of_infallible_member_is_raised() {
    let mockery = Mockery::new();
    let store = mockery.create_mock::<MockStore>().unwrap();

    mockery
        .expect(1)
        .on(&store)
        .method(MockStore::SIZE)
        .unwrap()
        .will(throw(Fault::new("disk gone").with_payload(5u32.to_value())));

    let payload = catch_unwind(AssertUnwindSafe(|| store.size())).unwrap_err();
    let fault = payload.downcast::<Fault>().unwrap();

    assert_eq!(fault.message(), "disk gone");
    assert_eq!(fault.to_string(), "disk gone (5)");

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
#[should_panic(expected = "No result was set for `Store::size`")]
fn missing_result_is_reported() {
    let mockery = Mockery::new();
    let store = mockery.create_mock::<MockStore>().unwrap();

    mockery.expect(1).on(&store).method(MockStore::SIZE).unwrap();

    store.size();
}

#[test]
#[should_panic(expected = "Unable to return \"many\" from `Store::size`")]
fn result_of_wrong_type_is_reported() {
    let mockery = Mockery::new();
    let store = mockery.create_mock::<MockStore>().unwrap();

    mockery
        .expect(1)
        .on(&store)
        .method(MockStore::SIZE)
        .unwrap()
        .will(return_value("many"));

    store.size();
}
