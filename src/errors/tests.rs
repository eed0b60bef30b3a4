//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ExpectedKinds};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at_line(line: u32) -> Position {
    Position::new(line, 1, Rc::new("test.wump".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
            line: 3,
        },
        at_line(3),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.to_string(), "illegal character \"@\" at line 3");
}

#[test]
fn test_expectation_error() {
    let error = Error::new(
        ErrorImpl::Expectation {
            expected: TokenKind::CloseParen.into(),
            found: TokenKind::OpenCurly,
            lexeme: "{".to_string(),
            line: 7,
        },
        at_line(7),
    );

    assert_eq!(error.get_error_name(), "Expectation");
    assert_eq!(error.to_string(), "expected RPAREN but got LBRACE (\"{\") on line 7");
    assert_eq!(error.get_tip().to_string(), "Expected RPAREN but got LBRACE on line 7");
}

#[test]
fn test_missing_token_error() {
    let error = Error::new(
        ErrorImpl::MissingToken {
            expected: TokenKind::CloseCurly.into(),
        },
        at_line(1),
    );

    assert_eq!(error.get_error_name(), "MissingToken");
    assert_eq!(error.to_string(), "expected RBRACE is missing");
}

#[test]
fn test_too_deeply_nested_error() {
    let error = Error::new(ErrorImpl::TooDeeplyNested { limit: 8, line: 2 }, at_line(2));

    assert_eq!(error.get_error_name(), "TooDeeplyNested");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_token_record_errors() {
    let malformed = Error::new(
        ErrorImpl::MalformedTokenRecord {
            record: 4,
            text: "ID x".to_string(),
        },
        at_line(4),
    );
    let unknown = Error::new(
        ErrorImpl::UnknownTokenKind {
            kind: "OPERATOR".to_string(),
            record: 2,
        },
        at_line(2),
    );

    assert_eq!(malformed.get_error_name(), "MalformedTokenRecord");
    assert_eq!(unknown.get_error_name(), "UnknownTokenKind");
    assert_eq!(unknown.get_tip().to_string(), "`OPERATOR` is not a token kind");
}

#[test]
fn test_expected_kinds_display() {
    assert_eq!(ExpectedKinds(vec![]).to_string(), "nothing");
    assert_eq!(ExpectedKinds::from(TokenKind::Identifier).to_string(), "ID");
    assert_eq!(
        ExpectedKinds(vec![TokenKind::Int, TokenKind::Bool]).to_string(),
        "INT or BOOL"
    );
    assert_eq!(
        ExpectedKinds(vec![TokenKind::Int, TokenKind::Bool, TokenKind::Void]).to_string(),
        "INT, BOOL or VOID"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
            line: 1,
        },
        at_line(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
