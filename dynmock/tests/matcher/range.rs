use dynmock::{matcher::range, Mockery};

use super::{MockShop, Shop};

#[test]
fn success() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(range(4..=6));

    shop.order(5);
}

#[test]
#[should_panic(expected = "unexpected invocation of shop.order(7)")]
fn failure() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(range(4..=6));

    shop.order(7);
}

#[test]
fn half_open_ranges() {
    let mockery = Mockery::new();
    let shop = mockery.create_mock::<MockShop>().unwrap();

    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::ORDER)
        .unwrap()
        .with(range(..3));
    mockery
        .expect(1)
        .on(&shop)
        .method(MockShop::RATE)
        .unwrap()
        .with(range(0.5..));

    shop.order(2);
    shop.rate(0.75);

    mockery.verify_all_expectations_have_been_met().unwrap();
}
