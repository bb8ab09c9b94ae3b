use std::panic::{catch_unwind, AssertUnwindSafe};

use dynmock::{mock, Cardinality, ErrorKind, Mockery};

pub trait Mouth {
    fn yell(&self);
    fn talk(&self, text: &str);
}

mock! {
    pub struct MockMouth;

    impl Mouth for MockMouth {
        fn yell(&self);
        fn talk(&self, text: &str);
    }
}

struct Person<M: Mouth> {
    mouth: M,
}

impl<M: Mouth> Person<M> {
    fn get_angry(&self) {
        self.mouth.yell();
    }

    fn greet(&self) {
        self.mouth.talk("hello");
    }
}

#[test]
fn person_must_never_yell() {
    let mockery = Mockery::new();
    let mouth = mockery.create_mock::<MockMouth>().unwrap();

    mockery
        .expect(Cardinality::never())
        .on(&mouth)
        .method(MockMouth::YELL)
        .unwrap();

    let person = Person { mouth };

    let payload = catch_unwind(AssertUnwindSafe(|| person.get_angry())).unwrap_err();
    let message = payload.downcast::<String>().unwrap();
    assert!(message.starts_with("unexpected invocation of mouth.yell()"));

    let err = mockery.verify_all_expectations_have_been_met().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedInvocation);
    assert_eq!(*message, err.to_string());
}

#[test]
fn calm_person_only_talks() {
    let mockery = Mockery::new();
    let mouth = mockery.create_mock::<MockMouth>().unwrap();

    {
        let _scope = mockery.ordered();

        mockery
            .expect(Cardinality::never())
            .on(&mouth)
            .method(MockMouth::YELL)
            .unwrap();
        mockery
            .expect(2)
            .on(&mouth)
            .method(MockMouth::TALK)
            .unwrap()
            .with("hello");
    }

    let person = Person { mouth };
    person.greet();
    person.greet();

    mockery.verify_all_expectations_have_been_met().unwrap();
}
