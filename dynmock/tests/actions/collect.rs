use dynmock::{
    action::{collect, return_value, Collector},
    Mockery, Value,
};

use super::{Calculator, MockCalculator};

#[test]
fn arguments_are_collected() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    let collector = Collector::new();

    mockery
        .expect(2)
        .on(&calculator)
        .method(MockCalculator::DESCRIBE)
        .unwrap()
        .will(collect(0, &collector))
        .will(return_value("number"));

    assert!(collector.is_empty());

    calculator.describe(7);
    calculator.describe(-3);

    assert_eq!(collector.len(), 2);
    assert_eq!(collector.values(), vec![Value::Int(7), Value::Int(-3)]);
    assert_eq!(collector.last_as::<i32>().unwrap(), Some(-3));

    mockery.verify_all_expectations_have_been_met().unwrap();
}
