//! Grouping of tokens into statements.
//!
//! A statement is the run of tokens the parser dispatches on. It ends
//! after a `;` (which is dropped), before any structural token, or before
//! the first token that starts on a new line. Structural tokens are never
//! part of a statement; the caller sees them through [`Lexer::peek`].

use crate::errors::errors::Result;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Whether `next` must not be appended to `statement`.
///
/// A bare newline only separates statements once the statement has
/// started, so blank lines and leading newlines never yield empty ones.
pub fn breaks_statement(statement: &[Token], next: &Token) -> bool {
    next.kind.is_structural() || (!statement.is_empty() && next.newline_before)
}

impl<'a> Lexer<'a> {
    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.next_token()?,
        };

        Ok(self.peeked.insert(token))
    }

    /// Returns false once only `EndOfInput` remains.
    pub fn has_more_tokens(&mut self) -> Result<bool> {
        Ok(self.peek()?.kind != TokenKind::EndOfInput)
    }

    /// Reads the next statement. May return an empty statement, e.g. for
    /// consecutive terminators or when a structural token comes next.
    pub fn next_statement(&mut self) -> Result<Vec<Token>> {
        let mut statement = vec![];

        loop {
            if breaks_statement(&statement, self.peek()?) {
                return Ok(statement);
            }

            let token = self.next_token()?;
            if token.kind == TokenKind::StatementTerminator {
                return Ok(statement);
            }

            statement.push(token);
        }
    }
}
