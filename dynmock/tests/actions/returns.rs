use dynmock::{
    action::{return_default, return_value},
    Mockery,
};

use super::{Calculator, MockCalculator};

#[test]
fn return_value_on_every_call() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    mockery
        .expect(3)
        .on(&calculator)
        .method(MockCalculator::ADD)
        .unwrap()
        .with((1, 2))
        .will(return_value(3));

    for _ in 0..3 {
        assert_eq!(calculator.add(1, 2), 3);
    }

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn last_result_wins() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    mockery
        .expect(1)
        .on(&calculator)
        .method(MockCalculator::DESCRIBE)
        .unwrap()
        .will(return_value("first"))
        .will(return_value("second"));

    assert_eq!(calculator.describe(1), "second");

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn return_default_of_the_member() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    mockery
        .stub()
        .on(&calculator)
        .method(MockCalculator::ADD)
        .unwrap()
        .will(return_default());
    mockery
        .stub()
        .on(&calculator)
        .method(MockCalculator::DESCRIBE)
        .unwrap()
        .will(return_default());

    assert_eq!(calculator.add(4, 5), 0);
    assert_eq!(calculator.describe(4), "");
}

#[test]
fn actions_are_listed_in_the_description() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    let handle = mockery
        .expect(1)
        .on(&calculator)
        .method(MockCalculator::ADD)
        .unwrap()
        .with((1, 2))
        .will(return_value(3))
        .handle();

    assert_eq!(
        handle.to_string(),
        "1 time: calculator.add(equal to 1, equal to 2), will return 3 [called 0 times]"
    );

    mockery.release();
}
