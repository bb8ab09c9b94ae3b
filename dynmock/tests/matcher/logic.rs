use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{
    action::return_value,
    matcher::{any, eq, gt, lt, ne, nothing, not, MatcherEx},
    Mockery,
};

use super::{MockShop, Shop};

#[test]
fn combined_matchers() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(2)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(gt(2).and(lt(10)).or(eq(20)));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::FIND)
        .unwrap()
        .with(not(eq("hammer")))
        .will(return_value(true));

    shop.order(5);
    shop.order(20);
    assert!(shop.find("nail"));

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn description_of_combined_matchers() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    let handle = mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(gt(2).and(ne(4)))
        .comment("bulk order")
        .handle();

    assert_eq!(
        handle.to_string(),
        "1 time: shop.order((? > 2 and not equal to 4)) (bulk order) [called 0 times]"
    );

    mockery.release();
}

#[test]
fn nothing_matches_nothing() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(..)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(nothing());
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::FIND)
        .unwrap()
        .with(any())
        .will(return_value(false));

    assert!(!shop.find("anything"));

    let result = catch_unwind(AssertUnwindSafe(|| shop.order(1)));
    assert!(result.is_err());

    mockery.release();
}
