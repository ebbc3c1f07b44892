use crate::{ErrorKind, Outcome, ParseError, ParseState, Token, TokenStream};

#[test]
fn error_kind_and_message() {
    let logic = ParseError::logic("No options supplied to opt");
    assert_eq!(logic.kind(), ErrorKind::Logic);
    assert!(logic.is_logic());
    assert!(!logic.is_runtime());
    assert_eq!(logic.message(), "No options supplied to opt");

    let runtime = ParseError::runtime("Expected argument following --name");
    assert_eq!(runtime.kind(), ErrorKind::Runtime);
    assert!(runtime.is_runtime());
}

#[test]
fn error_displays_bare_message() {
    let err = ParseError::runtime("Value 'c' not expected.");
    insta::assert_snapshot!(err.to_string(), @"Value 'c' not expected.");
}

#[test]
fn state_constructors_tag_outcome() {
    let tokens = TokenStream::new(vec![Token::argument("a")]);
    let cursor = tokens.cursor();

    let none = ParseState::no_match(cursor);
    assert_eq!(none.outcome(), Outcome::NoMatch);
    assert!(!none.is_match());
    assert_eq!(none.remaining(), cursor);

    let matched = ParseState::matched(cursor.advance());
    assert!(matched.is_match());
    assert!(!matched.is_short_circuit());
    assert_eq!(matched.remaining().position(), 1);

    let stop = ParseState::short_circuit(cursor);
    assert!(stop.is_match());
    assert!(stop.is_short_circuit());
}
