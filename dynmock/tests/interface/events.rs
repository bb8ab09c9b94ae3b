use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dynmock::{
    action::fire_event, mock, value::Handler, values, AsProxy, ErrorKind, Mockery, Value,
};

pub trait Button {
    fn add_clicked(&self, handler: Handler);
    fn remove_clicked(&self, handler: Handler);
    fn press(&self);
}

mock! {
    pub struct MockButton;

    impl Button for MockButton {
        fn add_clicked(&self, handler: Handler);
        fn remove_clicked(&self, handler: Handler);
        fn press(&self);
    }
}

fn counting_handler(clicks: &Arc<AtomicUsize>) -> Handler {
    let clicks = clicks.clone();

    Handler::new(move |_| {
        clicks.fetch_add(1, Ordering::SeqCst);
    })
    .named("counter")
}

#[test]
fn fired_events_reach_registered_handlers() {
    let mockery = Mockery::new();
    let button = mockery.create_mock::<MockButton>().unwrap();

    let clicks = Arc::new(AtomicUsize::new(0));
    let handler = counting_handler(&clicks);

    mockery
        .expect(1)
        .on(&button)
        .add_handler("clicked")
        .unwrap()
        .to(handler.clone())
        .unwrap();
    mockery
        .expect(2)
        .on(&button)
        .method(MockButton::PRESS)
        .unwrap()
        .will(fire_event("clicked", Vec::new()));
    mockery.expect(1).on(&button).remove_handler("clicked").unwrap();

    button.press();
    button.add_clicked(handler.clone());
    button.press();
    button.remove_clicked(handler);

    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert!(button.proxy().mock().handlers("clicked").is_empty());

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn event_arguments_are_passed_to_the_handler() {
    let mockery = Mockery::new();
    let button = mockery.create_mock::<MockButton>().unwrap();

    let received = Arc::new(AtomicUsize::new(0));
    let handler = {
        let received = received.clone();

        Handler::new(move |args| {
            if let Some(Value::UInt(x)) = args.first() {
                received.store(*x as usize, Ordering::SeqCst);
            }
        })
    };

    mockery.stub().on(&button).add_handler("clicked").unwrap();
    mockery
        .stub()
        .on(&button)
        .method(MockButton::PRESS)
        .unwrap()
        .will(fire_event("clicked", values![3u32]));

    button.add_clicked(handler);
    button.press();

    assert_eq!(received.load(Ordering::SeqCst), 3);
}

#[test]
fn handler_expectation_describes_the_accessor() {
    let mockery = Mockery::new();
    let button = mockery.create_mock::<MockButton>().unwrap();

    let handle = mockery
        .expect(1)
        .on(&button)
        .add_handler("clicked")
        .unwrap()
        .to(counting_handler(&Arc::default()))
        .unwrap()
        .handle();

    assert_eq!(
        handle.to_string(),
        "1 time: button.clicked += equal to <counter> [called 0 times]"
    );

    mockery.release();
}

#[test]
fn press_does_not_receive_a_value() {
    let mockery = Mockery::new();
    let button = mockery.create_mock::<MockButton>().unwrap();

    let err = mockery
        .expect(1)
        .on(&button)
        .method(MockButton::PRESS)
        .unwrap()
        .to(1)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(
        err.to_string(),
        "`MockButton::press` is not a setter or an event"
    );

    mockery.release();
}

#[test]
fn unknown_event_is_rejected() {
    let mockery = Mockery::new();
    let button = mockery.create_mock::<MockButton>().unwrap();

    let err = mockery.expect(1).on(&button).add_handler("released").unwrap_err();

    assert_eq!(err.to_string(), "`MockButton` has no member `add_released`");
}
