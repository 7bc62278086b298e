use std::{iter::Peekable, str::Chars};

use crate::{
    errors::errors::{Error, ErrorImpl, LexKind, Result},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Character-level scanner over a complete in-memory buffer.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the
/// buffer is exhausted every call yields [`TokenKind::EndOfInput`]. A lexer
/// that returned an error is left mid-token and should be dropped.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    /// One token of lookahead for the statement reader.
    pub(super) peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars().peekable(),
            offset: 0,
            line: 0,
            column: 0,
            peeked: None,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the next token, consuming it.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }

        self.scan_token()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Skips whitespace and reports whether a newline was among it.
    fn skip_whitespace(&mut self) -> bool {
        let mut saw_newline = false;

        while let Some(&c) = self.chars.peek() {
            if !is_whitespace(c) {
                break;
            }
            saw_newline |= c == '\n';
            self.advance();
        }

        saw_newline
    }

    /// Decodes the character following an already consumed `\`.
    fn escaped_char(&mut self) -> Result<char> {
        let position = self.position();

        match self.advance() {
            Some(c) => unescape(c).ok_or_else(|| {
                Error::new(ErrorImpl::Lex(LexKind::InvalidEscape(c)), position)
            }),
            None => Err(Error::new(ErrorImpl::Lex(LexKind::DanglingEscape), position)),
        }
    }

    /// Accumulates characters while `predicate` holds, decoding escapes.
    ///
    /// The first character failing the predicate is left unconsumed.
    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> Result<String> {
        let mut result = String::new();

        loop {
            match self.chars.peek().copied() {
                Some('\\') => {
                    self.advance();
                    result.push(self.escaped_char()?);
                }
                Some(c) if predicate(c) => {
                    self.advance();
                    result.push(c);
                }
                _ => break,
            }
        }

        Ok(result)
    }

    fn scan_token(&mut self) -> Result<Token> {
        let newline_before = self.skip_whitespace();
        let start = self.position();

        let c = match self.advance() {
            Some(c) => c,
            None => {
                return Ok(MK_TOKEN!(TokenKind::EndOfInput, String::new(), start, newline_before))
            }
        };

        if let Some(kind) = TokenKind::from_symbol(c) {
            return Ok(MK_TOKEN!(kind, c.to_string(), start, newline_before));
        }

        match c {
            '#' => {
                let mut text = String::from('#');
                text.push_str(&self.consume_while(|c| c != '\n' && c != ';')?);

                Ok(MK_TOKEN!(TokenKind::Comment, text, start, newline_before))
            }
            '"' => {
                let value = self.consume_while(|c| c != '"')?;

                if self.advance() != Some('"') {
                    return Err(Error::new(ErrorImpl::Lex(LexKind::UnterminatedString), start));
                }

                Ok(MK_TOKEN!(TokenKind::String, value, start, newline_before))
            }
            c if is_value_start(c) => {
                let mut raw = String::new();
                if c == '\\' {
                    raw.push(self.escaped_char()?);
                } else {
                    raw.push(c);
                }
                raw.push_str(&self.consume_while(is_value_char)?);

                Ok(MK_TOKEN!(TokenKind::classify(&raw), raw, start, newline_before))
            }
            c => Err(Error::new(ErrorImpl::Lex(LexKind::UnexpectedChar(c)), start)),
        }
    }
}

/// The fixed escape table; anything not listed is rejected.
pub fn unescape(c: char) -> Option<char> {
    match c {
        '#' | ';' | '{' | '}' | '[' | ']' | '"' => Some(c),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        _ => None,
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_value_start(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '*' | '\\')
}

/// Lexes `source` to exhaustion. The last token is always `EndOfInput`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
