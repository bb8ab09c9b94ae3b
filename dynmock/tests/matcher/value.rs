use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{
    action::return_value,
    matcher::{eq, field, gt, not_null, null, one_of, same, type_of, typed},
    value::{Handler, Record},
    Mockery,
};

use super::{MockShop, Parcel, Shop};

#[test]
fn records_are_matched_by_field() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::SUBMIT)
        .unwrap()
        .with(field("quantity", gt(10)));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::SUBMIT)
        .unwrap()
        .with(Record::new("Order").with("item", "nail").with("quantity", 2u32));

    shop.submit(Record::new("Order").with("quantity", 2u32).with("item", "nail"));
    shop.submit(Record::new("Order").with("item", "screw").with("quantity", 50u32));

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn objects_are_matched_by_value() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::SHIP)
        .unwrap()
        .with(eq(Parcel { weight: 3 }));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::SHIP)
        .unwrap()
        .with(typed(|parcel: &Parcel| parcel.weight > 100));

    shop.ship(&Parcel { weight: 3 });
    shop.ship(&Parcel { weight: 250 });

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn handlers_are_matched_by_identity() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    let handler = Handler::new(|_| ());
    let other = Handler::new(|_| ());

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::SUBSCRIBE)
        .unwrap()
        .with(same(handler.clone()));

    let result = catch_unwind(AssertUnwindSafe(|| shop.subscribe(other)));
    assert!(result.is_err());

    shop.subscribe(handler);

    assert!(mockery.verify_all_expectations_have_been_met().is_err());
    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn null_and_type_matchers() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::LOOKUP)
        .unwrap()
        .with(null())
        .will(return_value(false));
    mockery
        .expect(2)
        .on(&shop)
        .method(MockShop::LOOKUP)
        .unwrap()
        .with(not_null())
        .will(return_value(true));
    mockery
        .expect(3)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(one_of([1usize, 2, 3]));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::RATE)
        .unwrap()
        .with(type_of::<f64>());

    assert!(!shop.lookup(None));
    assert!(shop.lookup(Some(1)));
    assert!(shop.lookup(Some(2)));

    shop.order(1);
    shop.order(3);
    shop.order(2);
    shop.rate(1.5);

    mockery.verify_all_expectations_have_been_met().unwrap();
}
