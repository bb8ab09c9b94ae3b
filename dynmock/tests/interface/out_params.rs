use dynmock::{
    action::{return_value, set_named_out, set_out},
    matcher::{any, out},
    mock, MockStyle, Mockery,
};

pub trait Parser {
    fn try_parse(&self, text: &str, value: &mut u32) -> bool;
    fn increment(&self, counter: &mut u32);
}

mock! {
    pub struct MockParser;

    impl Parser for MockParser {
        fn try_parse(&self, text: &str, #[dynmock(out)] value: &mut u32) -> bool;
        fn increment(&self, counter: &mut u32);
    }
}

#[test]
fn output_parameter_is_written_back() {
    let mockery = Mockery::new();
    let parser = mockery.create_mock::<MockParser>().unwrap();

    mockery
        .expect(1)
        .on(&parser)
        .method(MockParser::TRY_PARSE)
        .unwrap()
        .with(("42", out()))
        .will(set_out(1, 42u32))
        .will(return_value(true));

    let mut value = 0;
    assert!(parser.try_parse("42", &mut value));
    assert_eq!(value, 42);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn input_output_parameter_is_matched_and_updated() {
    let mockery = Mockery::new();
    let parser = mockery.create_mock::<MockParser>().unwrap();

    mockery
        .expect(1)
        .on(&parser)
        .method(MockParser::INCREMENT)
        .unwrap()
        .with(5u32)
        .will(set_named_out("counter", 6u32));

    let mut counter = 5;
    parser.increment(&mut counter);
    assert_eq!(counter, 6);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
fn unassigned_output_keeps_the_callers_value() {
    let mockery = Mockery::new();
    let parser = mockery
        .mock::<MockParser>()
        .style(MockStyle::Loose)
        .build()
        .unwrap();

    let mut value = 17;
    assert!(!parser.try_parse("x", &mut value));
    assert_eq!(value, 17);

    mockery
        .expect(1)
        .on(&parser)
        .method(MockParser::TRY_PARSE)
        .unwrap()
        .with(("y", any()))
        .will(return_value(true));

    assert!(parser.try_parse("y", &mut value));
    assert_eq!(value, 17);

    mockery.verify_all_expectations_have_been_met().unwrap();
}

#[test]
#[should_panic(expected = "is an input parameter and can not be set")]
fn input_parameter_can_not_be_assigned() {
    let mockery = Mockery::new();
    let parser = mockery.create_mock::<MockParser>().unwrap();

    mockery
        .expect(1)
        .on(&parser)
        .method(MockParser::TRY_PARSE)
        .unwrap()
        .will(set_out(0, "changed"))
        .will(return_value(true));

    parser.try_parse("42", &mut 0);
}
