use dynmock::{action::return_value, matcher::eq, mock, Mockery};

trait MyTrait {
    fn exec(&self, x: usize) -> usize;
}

mock! {
    pub struct MockMyTrait;

    impl MyTrait for MockMyTrait {
        fn exec(&self, x: usize) -> usize;
    }
}

struct Service<T: MyTrait> {
    inner: T,
}

impl<T: MyTrait> Service<T> {
    fn new(inner: T) -> Self {
        Self { inner }
    }

    fn exec(&self) -> usize {
        self.inner.exec(4)
    }
}

#[test]
fn success() {
    let mockery = Mockery::new();
    let mock = mockery.create_mock::<MockMyTrait>().unwrap();

    mockery
        .expect(1)
        .on(&mock)
        .method(MockMyTrait::EXEC)
        .unwrap()
        .with(eq(4))
        .will(return_value(4usize));

    let service = Service::new(mock);

    assert_eq!(4, service.exec());
    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
#[should_panic(expected = "not all expected invocations were performed")]
fn failure() {
    let mockery = Mockery::new();
    let mock = mockery.create_mock::<MockMyTrait>().unwrap();

    mockery
        .expect(1)
        .on(&mock)
        .method(MockMyTrait::EXEC)
        .unwrap()
        .with_any_arguments()
        .will(return_value(4usize));

    drop(Service::new(mock));
}

#[test]
#[should_panic(expected = "unexpected invocation of my_trait.exec(4)")]
fn unexpected_arguments() {
    let mockery = Mockery::new();
    let mock = mockery.create_mock::<MockMyTrait>().unwrap();

    mockery
        .expect(1)
        .on(&mock)
        .method(MockMyTrait::EXEC)
        .unwrap()
        .with(5)
        .will(return_value(5usize));

    Service::new(mock).exec();
}

#[test]
fn member_can_be_selected_by_name() {
    let mockery = Mockery::new();
    let mock = mockery.mock::<MockMyTrait>().named("worker").build().unwrap();

    mockery
        .expect(2)
        .on(&mock)
        .method("exec")
        .unwrap()
        .with(4)
        .will(return_value(8usize));

    assert_eq!(mock.to_string(), "worker");
    assert_eq!(mock.exec(4), 8);
    assert_eq!(mock.exec(4), 8);

    mockery.verify_all_expectations_have_been_met().unwrap();
}
