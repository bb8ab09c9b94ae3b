mod logic;
mod range;
mod string;
mod value;

use dynmock::{
    mock,
    value::{Handler, Record},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parcel {
    pub weight: u32,
}

dynmock::value_type!(Parcel);

pub trait Shop {
    fn order(&self, count: usize);
    fn find(&self, name: &str) -> bool;
    fn rate(&self, score: f64);
    fn submit(&self, order: Record);
    fn ship(&self, parcel: &Parcel);
    fn lookup(&self, key: Option<u32>) -> bool;
    fn subscribe(&self, handler: Handler);
}

mock! {
    pub struct MockShop;

    impl Shop for MockShop {
        fn order(&self, count: usize);
        fn find(&self, name: &str) -> bool;
        fn rate(&self, score: f64);
        fn submit(&self, order: Record);
        fn ship(&self, parcel: &Parcel);
        fn lookup(&self, key: Option<u32>) -> bool;
        fn subscribe(&self, handler: Handler);
    }
}
