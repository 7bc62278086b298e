//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the lexer and parser. It
//! includes:
//!
//! - Error structures with source position information
//! - Lexing and parsing failure kinds
//! - Error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
