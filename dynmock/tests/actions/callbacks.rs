use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dynmock::{
    action::{call, invoke},
    FromValue, Invocation, MockError, Mockery, ToValue,
};

use super::{Calculator, MockCalculator};

#[test]
fn invoke_runs_the_callback() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    let resets = Arc::new(AtomicUsize::new(0));
    let counter = resets.clone();

    mockery
        .expect(2)
        .on(&calculator)
        .method(MockCalculator::RESET)
        .unwrap()
        .will(invoke(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

    calculator.reset();
    calculator.reset();

    assert_eq!(resets.load(Ordering::SeqCst), 2);
    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn call_computes_the_result_from_the_arguments() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    mockery
        .stub()
        .on(&calculator)
        .method(MockCalculator::ADD)
        .unwrap()
        .will(call(|invocation: &mut Invocation| -> Result<(), MockError> {
            let a = i32::from_value(invocation.parameter(0)?.clone())?;
            let b = i32::from_value(invocation.parameter_by_name("b")?.clone())?;

            invocation.set_result((a + b).to_value())
        }));

    assert_eq!(calculator.add(2, 3), 5);
    assert_eq!(calculator.add(-7, 3), -4);
}

#[test]
#[should_panic(expected = "Parameter index 5 is out of range for `Calculator::describe`")]
fn errors_of_callbacks_are_raised() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    mockery
        .stub()
        .on(&calculator)
        .method(MockCalculator::DESCRIBE)
        .unwrap()
        .will(call(|invocation: &mut Invocation| -> Result<(), MockError> {
            invocation.parameter(5).map(|_| ())
        }));

    calculator.describe(1);
}
