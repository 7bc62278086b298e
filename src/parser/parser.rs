//! Parser implementation for building the TyD tree.
//!
//! The parser pulls one statement at a time from the lexer and dispatches
//! on it together with the token that follows it:
//!
//! - `{` next: the statement is a table header
//! - `[` next: the statement names a list
//! - anything else: the statement is a record
//!
//! Tables recurse into [`Parser::parse_table_body`] until their `}`.

use log::{debug, trace};

use crate::{
    ast::ast::{AstNode, Table},
    errors::errors::{Error, ParseKind, Result},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    options::ParseOptions,
};

use super::stmt::{parse_list, parse_record, parse_table_head, split_trailing_comment};

/// Parsing state for one document.
pub struct Parser<'a> {
    /// Token source, consumed to exhaustion or until the first error
    lexer: Lexer<'a>,
    options: ParseOptions,
    /// Number of tables currently open, the root not counted
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>, options: ParseOptions) -> Self {
        Parser {
            lexer,
            options,
            depth: 0,
        }
    }

    /// Parses the whole document into the implicit root table.
    pub fn parse(mut self) -> Result<Table> {
        let mut root = Table::root();
        self.parse_table_body(&mut root)?;

        debug!("parsed document with {} top-level nodes", root.children.len());
        Ok(root)
    }

    /// Reads statements into `target` until its closing `}` has been
    /// consumed, or until the end of input for the root.
    pub fn parse_table_body(&mut self, target: &mut Table) -> Result<()> {
        let is_root = self.depth == 0;

        loop {
            let mut statement = self.lexer.next_statement()?;
            let mut comment = split_trailing_comment(&mut statement);
            let next = self.lexer.peek()?.clone();

            let (head, rest) = match statement.split_first() {
                Some(split) => split,
                None => {
                    if let Some(comment) = comment {
                        trace!("comment in `{}`", target.identifier);
                        target.children.push(AstNode::Comment(comment));
                        continue;
                    }

                    match next.kind {
                        TokenKind::CloseBrace if !is_root => {
                            self.lexer.next_token()?;
                            return Ok(());
                        }
                        TokenKind::EndOfInput if is_root => return Ok(()),
                        TokenKind::EndOfInput => {
                            return Err(Error::parse(
                                ParseKind::UnexpectedEof { expected: '}' },
                                next.kind,
                                next.position,
                            ))
                        }
                        TokenKind::OpenBrace | TokenKind::OpenBracket => {
                            return Err(Error::parse(
                                ParseKind::ExpectedIdentifier,
                                next.kind,
                                next.position,
                            ))
                        }
                        TokenKind::CloseBrace | TokenKind::CloseBracket => {
                            return Err(Error::parse(
                                ParseKind::UnexpectedToken,
                                next.kind,
                                next.position,
                            ))
                        }
                        _ => continue,
                    }
                }
            };

            let node = match next.kind {
                TokenKind::OpenBrace => {
                    self.lexer.next_token()?;
                    // A header comment sits above the table's body.
                    if let Some(comment) = comment.take() {
                        target.children.push(AstNode::Comment(comment));
                    }
                    AstNode::Table(self.parse_table(head, rest)?)
                }
                TokenKind::OpenBracket => {
                    self.lexer.next_token()?;
                    AstNode::List(parse_list(&mut self.lexer, head, rest)?)
                }
                _ => AstNode::Record(parse_record(head, rest)?),
            };

            trace!("{:?} in `{}`", node.identifier(), target.identifier);
            target.children.push(node);

            if let Some(comment) = comment {
                target.children.push(AstNode::Comment(comment));
            }
        }
    }

    /// Parses a table whose header is `head` + `rest`; the `{` has been consumed.
    fn parse_table(&mut self, head: &Token, rest: &[Token]) -> Result<Table> {
        let (identifier, attributes) = parse_table_head(head, rest)?;

        if self.depth >= self.options.max_depth {
            return Err(Error::parse(
                ParseKind::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                head.kind,
                head.position,
            ));
        }

        debug!("entering table `{}` at depth {}", identifier, self.depth + 1);

        let mut table = Table::new(identifier, attributes);
        self.depth += 1;
        self.parse_table_body(&mut table)?;
        self.depth -= 1;

        debug!(
            "leaving table `{}` with {} children",
            table.identifier,
            table.children.len()
        );
        Ok(table)
    }
}

/// Parses a lexer's whole input with default options.
pub fn parse(lexer: Lexer) -> Result<Table> {
    parse_with_options(lexer, &ParseOptions::default())
}

pub fn parse_with_options(lexer: Lexer, options: &ParseOptions) -> Result<Table> {
    Parser::new(lexer, *options).parse()
}
