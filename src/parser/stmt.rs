use log::trace;

use crate::{
    ast::ast::{Attribute, Comment, List, Number, Record, Value},
    errors::errors::{Error, ParseKind, Result},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

/// Removes a comment ending the statement, e.g. `Cat potato # note`.
pub fn split_trailing_comment(statement: &mut Vec<Token>) -> Option<Comment> {
    if statement.last()?.kind != TokenKind::Comment {
        return None;
    }

    statement.pop().map(|token| Comment { text: token.value })
}

fn expect_identifier(token: &Token) -> Result<String> {
    if token.kind != TokenKind::Identifier {
        return Err(Error::parse(ParseKind::ExpectedIdentifier, token.kind, token.position));
    }

    Ok(token.value.clone())
}

/// Splits a table header into its name and attributes.
pub fn parse_table_head(head: &Token, rest: &[Token]) -> Result<(String, Vec<Attribute>)> {
    let identifier = expect_identifier(head)?;
    Ok((identifier, parse_attributes(rest)?))
}

pub fn parse_attributes(tokens: &[Token]) -> Result<Vec<Attribute>> {
    let mut attributes: Vec<Attribute> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::AttributeIdentifier => attributes.push(Attribute {
                identifier: token.value.clone(),
                value: None,
            }),
            TokenKind::Identifier => match attributes.last_mut() {
                Some(attribute) => attribute.value = Some(token.value.clone()),
                None => {
                    return Err(Error::parse(
                        ParseKind::UnexpectedAttributeValue,
                        token.kind,
                        token.position,
                    ))
                }
            },
            _ => {
                return Err(Error::parse(
                    ParseKind::ExpectedAttribute,
                    token.kind,
                    token.position,
                ))
            }
        }
    }

    Ok(attributes)
}

/// Converts a value token into a scalar.
pub fn parse_value(token: &Token) -> Result<Value> {
    match token.kind {
        TokenKind::Number => {
            // Integers past the i64 range fall back to a decimal.
            let number = token
                .value
                .parse::<i64>()
                .ok()
                .filter(|_| !token.value.contains('.'))
                .map(Number::Integer)
                .or_else(|| token.value.parse::<f64>().map(Number::Decimal).ok());

            number
                .map(Value::Number)
                .ok_or_else(|| Error::parse(ParseKind::InvalidNumber, token.kind, token.position))
        }
        TokenKind::Null => Ok(Value::Null),
        _ => Ok(Value::String(token.value.clone())),
    }
}

/// A single token is coerced; several are joined into one bare string.
fn statement_value(head: &Token, rest: &[Token]) -> Result<Value> {
    if rest.is_empty() {
        return parse_value(head);
    }

    let words = std::iter::once(head)
        .chain(rest)
        .map(|token| token.value.as_str())
        .collect::<Vec<_>>();

    Ok(Value::String(words.join(" ")))
}

pub fn parse_record(head: &Token, rest: &[Token]) -> Result<Record> {
    let identifier = expect_identifier(head)?;

    let (value_head, value_rest) = rest
        .split_first()
        .ok_or_else(|| Error::parse(ParseKind::ExpectedValue, head.kind, head.position))?;

    Ok(Record {
        identifier,
        value: statement_value(value_head, value_rest)?,
    })
}

/// Parses list values up to and including `]`; the `[` has been consumed.
pub fn parse_list(lexer: &mut Lexer, head: &Token, rest: &[Token]) -> Result<List> {
    let identifier = expect_identifier(head)?;

    if let Some(extra) = rest.first() {
        return Err(Error::parse(ParseKind::UnexpectedToken, extra.kind, extra.position));
    }

    let mut values = vec![];

    loop {
        let mut statement = lexer.next_statement()?;
        if let Some(comment) = split_trailing_comment(&mut statement) {
            trace!("dropping {:?} inside list `{}`", comment.text, identifier);
        }

        if let Some((value_head, value_rest)) = statement.split_first() {
            values.push(statement_value(value_head, value_rest)?);
        }

        let next = lexer.peek()?;
        let (kind, position) = (next.kind, next.position);

        let error = match kind {
            TokenKind::CloseBracket => {
                lexer.next_token()?;
                return Ok(List { identifier, values });
            }
            TokenKind::EndOfInput => ParseKind::UnexpectedEof { expected: ']' },
            TokenKind::OpenBrace => ParseKind::UnsupportedListItem,
            TokenKind::OpenBracket | TokenKind::CloseBrace => ParseKind::UnexpectedToken,
            _ => continue,
        };

        return Err(Error::parse(error, kind, position));
    }
}
