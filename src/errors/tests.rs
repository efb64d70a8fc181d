//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParser {
            kind: TokenKind::Illegal,
            token: "@".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParser");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::new(3, 42),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Colon,
            found: TokenKind::Newline,
        },
        Position::new(1, 4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Colon at line 1, column 4, got Newline instead"
    );
}

#[test]
fn test_other_errors_append_position() {
    let error = Error::new(
        ErrorImpl::IdentifierNotFound {
            name: "foo".to_string(),
        },
        Position::new(2, 0),
    );

    assert_eq!(error.to_string(), "identifier not found: foo at line 2, column 0");
}

#[test]
fn test_file_read_error_has_no_position() {
    let error = Error::new(
        ErrorImpl::FileRead {
            path: "missing.py".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.to_string(),
        "could not read \"missing.py\": No such file or directory"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position::new(1, 0));

    match error.get_tip() {
        ErrorTip::None => (),
        _ => panic!("Expected ErrorTip::None"),
    }
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::new(1, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(msg) => {
            assert!(msg.contains("99999999999999999999"));
        }
        _ => panic!("Expected ErrorTip::Suggestion"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(format!("{}", tip), "Try this instead");

    let tip_none = ErrorTip::None;
    assert_eq!(format!("{}", tip_none), "");
}

#[test]
fn test_error_clone() {
    let error = Error::new(
        ErrorImpl::ExpectedIndentedBlock,
        Position::new(5, 4),
    );

    let cloned = error.clone();
    assert_eq!(cloned, error);
    assert_eq!(cloned.get_error_name(), "ExpectedIndentedBlock");
}
