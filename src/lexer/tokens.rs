use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Position;

lazy_static! {
    /// `-?` digits, optionally followed by `.` and more digits.
    pub static ref NUMBER_PATTERN: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap();
}

/// The literal that lexes as [`TokenKind::Null`].
pub const NULL_LITERAL: &str = "null";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    StatementTerminator,

    Comment,
    String,
    Identifier,
    AttributeIdentifier,
    Number,
    Null,
}

impl TokenKind {
    /// Kinds the statement reader never swallows into a statement.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::OpenBrace
                | TokenKind::CloseBrace
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket
                | TokenKind::EndOfInput
        )
    }

    /// Returns the kind for a single-character structural token.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ';' => Some(TokenKind::StatementTerminator),
            _ => None,
        }
    }

    /// Classifies the raw text of a bare (unquoted) value.
    pub fn classify(raw: &str) -> TokenKind {
        if NUMBER_PATTERN.is_match(raw) {
            TokenKind::Number
        } else if raw == NULL_LITERAL {
            TokenKind::Null
        } else if raw.starts_with('*') {
            TokenKind::AttributeIdentifier
        } else {
            TokenKind::Identifier
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Where the first character of the token sits.
    pub position: Position,
    /// Whether the whitespace skipped before this token contained a newline.
    pub newline_before: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::AttributeIdentifier,
            TokenKind::Number,
            TokenKind::Comment,
        ]) {
            write!(f, "{} ({}) @ {}", self.kind, self.value, self.position)
        } else {
            write!(f, "{} @ {}", self.kind, self.position)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
