//! Lexical analysis module.
//!
//! This module contains the lexer that converts TyD text into a stream
//! of tokens for parsing. It handles:
//!
//! - Whitespace skipping and escape decoding
//! - Classification of bare values into numbers, nulls, identifiers and attributes
//! - Token position tracking for error reporting
//! - Grouping tokens into statements with one token of lookahead

pub mod lexer;
pub mod statements;
pub mod tokens;
