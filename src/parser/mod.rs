//! Parser module for building the TyD tree.
//!
//! This module contains the recursive-descent parser that turns the
//! lexer's statement stream into tables, records, lists and comments. It
//! handles:
//!
//! - Table headers and their `*attribute` lists
//! - Records, including unquoted multi-word values
//! - Inline and multi-line lists of scalar values
//! - Comments, standalone or trailing a statement

pub mod parser;
pub mod stmt;
