//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LexKind, ParseKind};
use crate::lexer::tokens::TokenKind;
use crate::Position;

fn position(line: usize, column: usize) -> Position {
    Position {
        offset: 0,
        line,
        column,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::Lex(LexKind::UnexpectedChar('@')), position(0, 0));

    assert_eq!(error.get_error_name(), "UnexpectedChar");
}

#[test]
fn test_error_position() {
    let error = Error::parse(
        ParseKind::ExpectedIdentifier,
        TokenKind::Number,
        position(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_parse_error_carries_token_kind() {
    let error = Error::parse(
        ParseKind::ExpectedAttribute,
        TokenKind::String,
        position(0, 9),
    );

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::Parse {
            kind: ParseKind::ExpectedAttribute,
            token: TokenKind::String,
        }
    );
    assert_eq!(error.get_error_name(), "ExpectedAttribute");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::Lex(LexKind::InvalidEscape('a')), position(1, 3));
    assert_eq!(error.to_string(), "lex error: invalid escape character 'a' at 1:3");

    let error = Error::parse(
        ParseKind::UnexpectedEof { expected: '}' },
        TokenKind::EndOfInput,
        position(2, 0),
    );
    assert_eq!(
        error.to_string(),
        "parse error: unexpected end of input, expected '}' (found EndOfInput) at 2:0"
    );
}

#[test]
fn test_error_names() {
    let errors = [
        (ErrorImpl::Lex(LexKind::UnterminatedString), "UnterminatedString"),
        (ErrorImpl::Lex(LexKind::DanglingEscape), "DanglingEscape"),
        (
            ErrorImpl::Parse {
                kind: ParseKind::UnexpectedAttributeValue,
                token: TokenKind::Identifier,
            },
            "UnexpectedAttributeValue",
        ),
        (
            ErrorImpl::Parse {
                kind: ParseKind::ExpectedValue,
                token: TokenKind::Identifier,
            },
            "ExpectedValue",
        ),
        (
            ErrorImpl::Parse {
                kind: ParseKind::NestingTooDeep { limit: 2 },
                token: TokenKind::Identifier,
            },
            "NestingTooDeep",
        ),
    ];

    for (error_impl, name) in errors {
        assert_eq!(Error::new(error_impl, position(0, 0)).get_error_name(), name);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::Lex(LexKind::UnexpectedChar('$')), position(0, 0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::parse(
        ParseKind::UnexpectedEof { expected: ']' },
        TokenKind::EndOfInput,
        position(0, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `]` before the end of input"),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_error_tip_display() {
    assert_eq!(format!("{}", ErrorTip::None), "");
    assert_eq!(
        format!("{}", ErrorTip::Suggestion(String::from("try this"))),
        "try this"
    );
}
