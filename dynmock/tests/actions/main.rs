mod callbacks;
mod collect;
mod returns;
mod signal;

use dynmock::mock;

pub trait Calculator {
    fn add(&self, a: i32, b: i32) -> i32;
    fn describe(&self, value: i32) -> String;
    fn reset(&self);
}

mock! {
    pub struct MockCalculator;

    impl Calculator for MockCalculator {
        fn add(&self, a: i32, b: i32) -> i32;
        fn describe(&self, value: i32) -> String;
        fn reset(&self);
    }
}
