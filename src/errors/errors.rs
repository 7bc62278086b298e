use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn parse(kind: ParseKind, token: TokenKind, position: Position) -> Self {
        Error::new(ErrorImpl::Parse { kind, token }, position)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lex(kind) => match kind {
                LexKind::UnexpectedChar(_) => "UnexpectedChar",
                LexKind::InvalidEscape(_) => "InvalidEscape",
                LexKind::UnterminatedString => "UnterminatedString",
                LexKind::DanglingEscape => "DanglingEscape",
            },
            ErrorImpl::Parse { kind, .. } => match kind {
                ParseKind::ExpectedIdentifier => "ExpectedIdentifier",
                ParseKind::ExpectedAttribute => "ExpectedAttribute",
                ParseKind::UnexpectedAttributeValue => "UnexpectedAttributeValue",
                ParseKind::UnexpectedEof { .. } => "UnexpectedEof",
                ParseKind::ExpectedValue => "ExpectedValue",
                ParseKind::UnexpectedToken => "UnexpectedToken",
                ParseKind::InvalidNumber => "InvalidNumber",
                ParseKind::UnsupportedListItem => "UnsupportedListItem",
                ParseKind::NestingTooDeep { .. } => "NestingTooDeep",
            },
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lex(kind) => match kind {
                LexKind::UnexpectedChar(_) => ErrorTip::None,
                LexKind::InvalidEscape(c) => ErrorTip::Suggestion(format!(
                    "`\\{}` is not an escape, only # ; {{ }} [ ] \" n r t \\ can follow a backslash",
                    c
                )),
                LexKind::UnterminatedString => {
                    ErrorTip::Suggestion(String::from("did you forget a closing `\"`?"))
                }
                LexKind::DanglingEscape => ErrorTip::None,
            },
            ErrorImpl::Parse { kind, token } => match kind {
                ParseKind::ExpectedIdentifier => {
                    ErrorTip::Suggestion(format!("Expected an identifier, found {}", token))
                }
                ParseKind::ExpectedAttribute => ErrorTip::Suggestion(format!(
                    "Table headers only hold `*attributes` and their values, found {}",
                    token
                )),
                ParseKind::UnexpectedAttributeValue => ErrorTip::Suggestion(String::from(
                    "Attribute values must follow an `*attribute`",
                )),
                ParseKind::UnexpectedEof { expected } => {
                    ErrorTip::Suggestion(format!("Expected `{}` before the end of input", expected))
                }
                ParseKind::ExpectedValue => ErrorTip::Suggestion(String::from(
                    "Records need a value, use `null` for an empty one",
                )),
                ParseKind::UnexpectedToken => {
                    ErrorTip::Suggestion(format!("Unexpected {}, is a bracket unbalanced?", token))
                }
                ParseKind::InvalidNumber => ErrorTip::Suggestion(String::from(
                    "Numbers are digits with an optional `-` and one `.`",
                )),
                ParseKind::UnsupportedListItem => ErrorTip::Suggestion(String::from(
                    "Lists may only hold strings, numbers and null",
                )),
                ParseKind::NestingTooDeep { limit } => {
                    ErrorTip::Suggestion(format!("Tables may nest at most {} deep", limit))
                }
            },
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("lex error: {0}")]
    Lex(LexKind),
    #[error("parse error: {kind} (found {token})")]
    Parse { kind: ParseKind, token: TokenKind },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("backslash at end of input")]
    DanglingEscape,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseKind {
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected attribute identifier or identifier")]
    ExpectedAttribute,
    #[error("attribute value without attribute")]
    UnexpectedAttributeValue,
    #[error("unexpected end of input, expected {expected:?}")]
    UnexpectedEof { expected: char },
    #[error("expected value")]
    ExpectedValue,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("error parsing number")]
    InvalidNumber,
    #[error("tables are not supported as list items")]
    UnsupportedListItem,
    #[error("tables nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
