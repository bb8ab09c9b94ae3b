use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dynmock::{
    action::{fire_event, return_value},
    matcher::any,
    mock,
    value::{Handler, Record},
    values, ErrorKind, MockStyle, Mockery, Value,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    pub name: String,
}

impl Product {
    fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

dynmock::value_type!(Product);

pub trait Warehouse {
    fn get_products(&self, name: &str) -> Vec<Product>;
    fn add_something_went_wrong(&self, handler: Handler);
    fn remove_something_went_wrong(&self, handler: Handler);
}

mock! {
    pub struct MockWarehouse;

    impl Warehouse for MockWarehouse {
        fn get_products(&self, name: &str) -> Vec<Product>;
        fn add_something_went_wrong(&self, handler: Handler);
        fn remove_something_went_wrong(&self, handler: Handler);
    }
}

#[derive(Default)]
struct ShoppingCart {
    products: Vec<Product>,
    is_red: Arc<AtomicBool>,
}

impl ShoppingCart {
    fn add_products<W: Warehouse>(&mut self, name: &str, warehouse: &W) {
        let is_red = self.is_red.clone();
        let handler = Handler::new(move |args: &[Value]| {
            let bad_request = args
                .first()
                .and_then(|args| args.field("bad_request"))
                .is_some_and(|value| *value == Value::Bool(true));

            if bad_request {
                is_red.store(true, Ordering::SeqCst);
            }
        })
        .named("shopping cart");

        warehouse.add_something_went_wrong(handler.clone());
        self.products.extend(warehouse.get_products(name));
        warehouse.remove_something_went_wrong(handler);
    }

    fn product_count(&self) -> usize {
        self.products.len()
    }

    fn is_red(&self) -> bool {
        self.is_red.load(Ordering::SeqCst)
    }
}

fn expect_handlers(mockery: &Mockery, warehouse: &MockWarehouse) {
    mockery
        .expect(1)
        .on(warehouse)
        .add_handler("something_went_wrong")
        .unwrap();
    mockery
        .expect(1)
        .on(warehouse)
        .remove_handler("something_went_wrong")
        .unwrap();
}

#[test]
fn products_are_added_to_the_cart() {
    let mockery = Mockery::new();
    let warehouse = mockery.create_mock::<MockWarehouse>().unwrap();

    expect_handlers(&mockery, &warehouse);
    mockery
        .expect(1)
        .on(&warehouse)
        .method(MockWarehouse::GET_PRODUCTS)
        .unwrap()
        .with("nail")
        .will(return_value(vec![Product::new("nail"), Product::new("nail")]));

    let mut cart = ShoppingCart::default();
    cart.add_products("nail", &warehouse);

    assert_eq!(cart.product_count(), 2);
    assert!(!cart.is_red());

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn failed_request_turns_the_cart_red() {
    let mockery = Mockery::new();
    let warehouse = mockery.create_mock::<MockWarehouse>().unwrap();

    expect_handlers(&mockery, &warehouse);
    mockery
        .expect(1)
        .on(&warehouse)
        .method(MockWarehouse::GET_PRODUCTS)
        .unwrap()
        .with(any())
        .will(fire_event(
            "something_went_wrong",
            values![Record::new("ErrorArgs").with("bad_request", true)],
        ))
        .will(return_value(Vec::<Product>::new()));

    let mut cart = ShoppingCart::default();
    cart.add_products("nail", &warehouse);

    assert_eq!(cart.product_count(), 0);
    assert!(cart.is_red());

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn unexpected_product_fails_a_strict_warehouse() {
    let mockery = Mockery::new();
    let warehouse = mockery.create_mock::<MockWarehouse>().unwrap();

    mockery
        .expect(1)
        .on(&warehouse)
        .method(MockWarehouse::GET_PRODUCTS)
        .unwrap()
        .with("nail")
        .will(return_value(vec![Product::new("nail")]));

    let payload = catch_unwind(AssertUnwindSafe(|| warehouse.get_products("hammer"))).unwrap_err();
    let message = payload.downcast::<String>().unwrap();

    assert_eq!(
        *message,
        "unexpected invocation of warehouse.get_products(\"hammer\")\nExpected:\n  1 time: warehouse.get_products(equal to \"nail\"), will return [Product { name: \"nail\" }] [called 0 times]\n"
    );

    let err = mockery.verify_all_expectations_have_been_met().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedInvocation);

    mockery.release();
}

#[test]
fn unexpected_product_is_ignored_by_lenient_warehouses() {
    for style in [MockStyle::Loose, MockStyle::Stub] {
        let mockery = Mockery::new();
        let warehouse = mockery.mock::<MockWarehouse>().style(style).build().unwrap();

        mockery
            .expect(1)
            .on(&warehouse)
            .method(MockWarehouse::GET_PRODUCTS)
            .unwrap()
            .with("nail")
            .will(return_value(vec![Product::new("nail")]));

        assert!(warehouse.get_products("hammer").is_empty());
        assert_eq!(warehouse.get_products("nail"), vec![Product::new("nail")]);

        mockery.verify_all_expectations_have_been_met().unwrap();
    }
}

#[test]
fn harmless_error_keeps_the_cart_green() {
    let mockery = Mockery::new();
    let warehouse = mockery.mock::<MockWarehouse>().style(MockStyle::Loose).build().unwrap();

    mockery
        .expect(1)
        .on(&warehouse)
        .add_handler("something_went_wrong")
        .unwrap()
        .to(any())
        .unwrap();
    mockery
        .stub()
        .on(&warehouse)
        .method(MockWarehouse::GET_PRODUCTS)
        .unwrap()
        .will(fire_event(
            "something_went_wrong",
            values![Record::new("ErrorArgs").with("bad_request", false)],
        ))
        .will(return_value(Vec::<Product>::new()));

    let mut cart = ShoppingCart::default();
    cart.add_products("nail", &warehouse);

    assert!(!cart.is_red());
    mockery.verify_all_expectations_have_been_met().unwrap();
}
