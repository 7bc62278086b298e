#![allow(clippy::module_inception)]

//! Front end for TyD, a small human-editable structured-data language.
//!
//! ```rust
//! use tyd::{ast::ast::AstNode, parse_str};
//!
//! let root = parse_str("Cat *abstract {\n  name \"Tom\"\n  lives 9\n}").unwrap();
//! let AstNode::Table(cat) = &root.children[0] else { panic!() };
//! assert_eq!(cat.identifier, "Cat");
//! assert_eq!(cat.records().count(), 2);
//! ```

use std::fmt::Display;

use crate::errors::errors::ErrorTip;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod options;
pub mod parser;

pub use ast::ast::{AstNode, Attribute, Comment, List, Number, Record, Table, Value};
pub use errors::errors::{Error, ErrorImpl, LexKind, ParseKind, Result};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};
pub use options::ParseOptions;
pub use parser::parser::{parse, parse_with_options, Parser};

/// A location in the source; `line` and `column` count from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset into the source
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexes and parses `source` with default options.
pub fn parse_str(source: &str) -> Result<Table> {
    parse(Lexer::new(source))
}

/// Returns the 1-based line number, the line's text and the column.
pub fn get_line_at_position(source: &str, position: &Position) -> (usize, String, usize) {
    let line = source.split('\n').nth(position.line).unwrap_or_default();

    (position.line + 1, line.to_string(), position.column)
}

/// Renders an error as a caret diagram under the failing line.
pub fn format_error(error: &Error, source: &str, name: &str) -> String {
    /*
        Error: message
        -> config.tyd
           |
        20 | Cat *source "Potato" {
           | ------------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_position());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    output.push_str(&format!("-> {}\n", name));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Cat potato\nTree sea\n  Dog \"woof\"\n";

        let position = Position { offset: 0, line: 0, column: 4 };
        let (line_number, line, line_pos) = get_line_at_position(source, &position);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Cat potato");
        assert_eq!(line_pos, 4);

        let position = Position { offset: 22, line: 2, column: 2 };
        let (line_number, line, line_pos) = get_line_at_position(source, &position);
        assert_eq!(line_number, 3);
        assert_eq!(line, "  Dog \"woof\"");
        assert_eq!(line_pos, 2);
    }

    #[test]
    fn test_get_line_past_end() {
        let position = Position { offset: 3, line: 5, column: 0 };
        let (line_number, line, _) = get_line_at_position("Cat", &position);
        assert_eq!(line_number, 6);
        assert_eq!(line, "");
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "Cat\n{\n  name @\n}";
        let error = parse_str(source).unwrap_err();
        let output = format_error(&error, source, "cat.tyd");

        assert!(output.starts_with("Error: UnexpectedChar\n"));
        assert!(output.contains("-> cat.tyd"));
        assert!(output.contains("3 | name @"));
        assert!(output.ends_with("  | -----^\n"));
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(remove_starting_whitespace("\t  Cat"), (String::from("Cat"), 3));
        assert_eq!(remove_starting_whitespace("Cat"), (String::from("Cat"), 0));
    }
}
