use dynmock::{
    action::return_value,
    matcher::{contains, ends_with, eq, is_empty, starts_with, to_string},
    Mockery,
};

use super::{MockShop, Shop};

#[test]
fn string_matchers() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    for matcher in [starts_with("ham"), starts_with("sc")] {
        mockery
            .expect(1)
            .on(&shop)
            .method(MockShop::FIND)
            .unwrap()
            .with(matcher)
            .will(return_value(true));
    }
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::FIND)
        .unwrap()
        .with(contains("ai"))
        .will(return_value(true));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::FIND)
        .unwrap()
        .with(ends_with("ver"))
        .will(return_value(true));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::FIND)
        .unwrap()
        .with(is_empty())
        .will(return_value(false));

    assert!(shop.find("hammer"));
    assert!(shop.find("screw"));
    assert!(shop.find("nail"));
    assert!(shop.find("driver"));
    assert!(!shop.find(""));

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn string_representation_of_numbers() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(to_string(eq("12")));

    shop.order(12);

    mockery.verify_all_expectations_have_been_met().unwrap();
}
