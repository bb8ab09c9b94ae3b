use std::thread;

use dynmock::{
    action::{block_on, return_value, signal, WaitHandle},
    types::Duration,
    Mockery,
};

use super::{Calculator, MockCalculator};

#[test]
fn background_call_signals_the_test() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    let called = WaitHandle::new();

    mockery
        .expect(1)
        .on(&calculator)
        .method(MockCalculator::ADD)
        .unwrap()
        .with((20, 22))
        .will(signal(&called))
        .will(return_value(42));

    let worker = {
        let calculator = calculator.clone();

        thread::spawn(move || calculator.add(20, 22))
    };

    let timeout: Duration = "5s".parse().unwrap();
    assert!(called.wait_timeout(timeout));
    assert_eq!(worker.join().unwrap(), 42);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn blocked_call_continues_after_signal() {
    let mockery = Mockery::new();
    let calculator = mockery.create_mock::<MockCalculator>().unwrap();

    let entered = WaitHandle::new();
    let release = WaitHandle::new();

    mockery
        .expect(1)
        .on(&calculator)
        .method(MockCalculator::RESET)
        .unwrap()
        .will(signal(&entered))
        .will(block_on(&release));

    let worker = {
        let calculator = calculator.clone();

        thread::spawn(move || calculator.reset())
    };

    assert!(entered.wait_timeout(Duration::from_secs(5)));
    assert!(!release.is_signalled());

    release.signal();
    worker.join().unwrap();

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn wait_times_out_without_signal() {
    let handle = WaitHandle::new();

    assert!(!handle.wait_timeout("20ms".parse::<Duration>().unwrap()));
}
