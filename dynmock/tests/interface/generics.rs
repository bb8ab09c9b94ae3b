use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{
    action::return_value,
    matcher::closure,
    mock, FromValue, MockStyle, Mockery, TypeArg,
};

pub trait Registry {
    fn register<T>(&self, name: &str);
    fn lookup<T: FromValue>(&self, name: &str) -> Option<T>;
    fn create<T: FromValue>(&self) -> T;
}

mock! {
    pub struct MockRegistry;

    impl Registry for MockRegistry {
        fn register<T>(&self, name: &str);
        fn lookup<T: FromValue>(&self, name: &str) -> Option<T>;
        fn create<T: FromValue>(&self) -> T;
    }
}

#[test]
fn type_arguments_are_matched() {
    let mockery = Mockery::new();
    let registry = mockery.create_mock::<MockRegistry>().unwrap();

    mockery
        .expect(1)
        .on(&registry)
        .method(MockRegistry::REGISTER)
        .unwrap()
        .generic::<u32>()
        .with("answer");

    let result = catch_unwind(AssertUnwindSafe(|| registry.register::<String>("answer")));
    assert!(result.is_err());

    registry.register::<u32>("answer");

    let err = mockery.verify_all_expectations_have_been_met().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("unexpected invocation of registry.register<alloc::string::String>(\"answer\")"));
}

#[test]
fn generic_result_is_converted_by_the_caller() {
    let mockery = Mockery::new();
    let registry = mockery.create_mock::<MockRegistry>().unwrap();

    mockery
        .expect(1)
        .on(&registry)
        .method(MockRegistry::LOOKUP)
        .unwrap()
        .generic_matching(closure(|t: &TypeArg| t.name().ends_with("u64")).described("an u64"))
        .with("answer")
        .will(return_value(42u64));
    mockery
        .expect(1)
        .on(&registry)
        .method(MockRegistry::LOOKUP)
        .unwrap()
        .generic::<String>()
        .with_any_arguments()
        .will(return_value(()));

    assert_eq!(registry.lookup::<u64>("answer"), Some(42));
    assert_eq!(registry.lookup::<String>("question"), None);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn lenient_mocks_return_the_default_of_the_type_argument() {
    let mockery = Mockery::new();

    for style in [MockStyle::Loose, MockStyle::Stub] {
        let registry = mockery
            .mock::<MockRegistry>()
            .style(style)
            .build()
            .unwrap();

        assert_eq!(registry.create::<u32>(), 0);
        assert_eq!(registry.create::<String>(), "");
        assert_eq!(registry.create::<Vec<u8>>(), Vec::<u8>::new());
        assert_eq!(registry.lookup::<u64>("answer"), None);
    }

    mockery.verify_all_expectations_have_been_met().unwrap();
}
