use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{
    action::return_value,
    matcher::{gt, starts_with},
    mock, MockError, Mockery,
};

pub trait Settings {
    fn get_volume(&self) -> u32;
    fn set_volume(&self, value: u32);
    fn get_level(&self, channel: u8) -> u32;
    fn get_item(&self, key: &str) -> u32;
    fn set_item(&self, key: &str, value: u32);
}

mock! {
    pub struct MockSettings;

    impl Settings for MockSettings {
        fn get_volume(&self) -> u32;
        fn set_volume(&self, value: u32);
        fn get_level(&self, channel: u8) -> u32;
        fn get_item(&self, key: &str) -> u32;
        fn set_item(&self, key: &str, value: u32);
    }
}

#[test]
fn property_get_and_set() {
    let mockery = Mockery::new();
    let settings = mockery.create_mock::<MockSettings>().unwrap();

    mockery
        .expect(1)
        .on(&settings)
        .get_property("volume")
        .unwrap()
        .will(return_value(7u32));
    mockery
        .expect(1)
        .on(&settings)
        .set_property("volume")
        .unwrap()
        .to(gt(5u32))
        .unwrap();

    assert_eq!(settings.get_volume(), 7);
    settings.set_volume(9);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn setter_with_wrong_value_is_unexpected() {
    let mockery = Mockery::new();
    let settings = mockery.create_mock::<MockSettings>().unwrap();

    mockery
        .expect(1)
        .on(&settings)
        .set_property("volume")
        .unwrap()
        .to(gt(5u32))
        .unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| settings.set_volume(3)));
    assert!(result.is_err());

    let err = mockery.verify_all_expectations_have_been_met().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected invocation of settings.volume = 3\nExpected:\n  1 time: settings.volume = ? > 5 [called 0 times]\n"
    );
}

#[test]
fn indexer_get_and_set() {
    let mockery = Mockery::new();
    let settings = mockery.create_mock::<MockSettings>().unwrap();

    mockery
        .expect(1)
        .on(&settings)
        .get_index(starts_with("vol"))
        .unwrap()
        .will(return_value(4u32));
    mockery
        .expect(1)
        .on(&settings)
        .set_index("volume")
        .unwrap()
        .to(4u32)
        .unwrap();

    assert_eq!(settings.get_item("volume"), 4);
    settings.set_item("volume", 4);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn member_with_arguments_is_no_property() {
    let mockery = Mockery::new();
    let settings = mockery.create_mock::<MockSettings>().unwrap();

    let err = mockery.expect(1).on(&settings).get_property("level").unwrap_err();

    assert!(matches!(
        err,
        MockError::WrongMemberShape {
            expected: "a property getter",
            ..
        }
    ));
}
