use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{action::return_value, mock, AsProxy, MockStyle, Mockery, MockeryOptions};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Zone(String);

#[derive(Clone, Debug, PartialEq)]
pub struct Offset(i32);

dynmock::value_type!(Zone);
dynmock::value_type!(Offset => Offset(0));

pub trait Clock {
    fn now(&self) -> u64;
    fn names(&self) -> Vec<String>;
    fn zone(&self) -> Zone;
    fn offset(&self) -> Offset;

    fn label(&self) -> String {
        "utc".into()
    }
}

mock! {
    pub struct MockClock;

    impl Clock for MockClock {
        fn now(&self) -> u64;
        fn names(&self) -> Vec<String>;
        fn zone(&self) -> Zone;
        fn offset(&self) -> Offset;

        fn label(&self) -> String {
            format!("mocked {}", self.now())
        }
    }
}

fn clock(mockery: &Mockery, style: MockStyle) -> MockClock {
    mockery.mock::<MockClock>().style(style).build().unwrap()
}

#[test]
fn loose_mock_returns_defaults() {
    let mockery = Mockery::new();
    let clock = clock(&mockery, MockStyle::Loose);

    mockery
        .expect(1)
        .on(&clock)
        .method(MockClock::NOW)
        .unwrap()
        .will(return_value(10u64));

    assert_eq!(clock.now(), 10);
    assert_eq!(clock.now(), 0);
    assert!(clock.names().is_empty());

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn lenient_mocks_return_defaults_of_value_types() {
    let mockery = Mockery::new();

    for style in [MockStyle::Loose, MockStyle::Stub] {
        let clock = clock(&mockery, style);

        assert_eq!(clock.zone(), Zone::default());
        assert_eq!(clock.zone(), Zone::default());
        assert_eq!(clock.offset(), Offset(0));
    }

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn stub_returns_the_same_value_on_every_call() {
    let mockery = Mockery::new();
    let clock = clock(&mockery, MockStyle::Stub);

    let first = clock.names();
    let second = clock.names();

    assert_eq!(first, second);
    assert_eq!(clock.now(), 0);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn transparent_mock_calls_the_implementation() {
    let mockery = Mockery::new();
    let clock = clock(&mockery, MockStyle::Transparent);

    mockery
        .expect(1)
        .on(&clock)
        .method(MockClock::NOW)
        .unwrap()
        .will(return_value(3u64));

    assert_eq!(clock.label(), "mocked 3");

    mockery
        .expect(1)
        .on(&clock)
        .method(MockClock::LABEL)
        .unwrap()
        .will(return_value("expected"));

    assert_eq!(clock.label(), "expected");

    let result = catch_unwind(AssertUnwindSafe(|| clock.now()));
    assert!(result.is_err());

    let err = mockery.verify_all_expectations_have_been_met().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("unexpected invocation of clock.now()"));
}

#[test]
fn strict_mock_does_not_call_the_implementation() {
    let mockery = Mockery::new();
    let clock = clock(&mockery, MockStyle::Default);

    let result = catch_unwind(AssertUnwindSafe(|| clock.label()));
    assert!(result.is_err());

    mockery.release();
}

#[test]
fn default_style_comes_from_the_options() {
    let mockery = Mockery::with_options(MockeryOptions {
        default_style: MockStyle::Stub,
        ..MockeryOptions::default()
    });
    let clock = mockery.create_mock::<MockClock>().unwrap();

    assert_eq!(clock.now(), 0);
    assert_eq!(clock.proxy().mock().style(), MockStyle::Stub);
}

#[test]
fn style_can_only_be_set_once() {
    let mockery = Mockery::new();

    let err = mockery
        .mock::<MockClock>()
        .style(MockStyle::Loose)
        .style(MockStyle::Stub)
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Style of the mock was already set to Loose"
    );
}
