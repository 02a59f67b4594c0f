mod token;

use std::iter::FusedIterator;

use thiserror::Error;

pub use self::token::*;

/// The kind of a lexer error
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexerErrorKind {
    UnknownToken,
}

/// When the expression contains something that is not a token, the lexer
/// will return this error.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
#[error("unknown token at index {index}")]
pub struct LexerError {
    /// The error kind
    pub kind: LexerErrorKind,

    /// The byte index of the first character which caused the error
    pub index: usize,
}

/// A lexer reads an arithmetic expression and returns the list of tokens in
/// the expression, so that the parser does not have to deal with characters.
///
/// Signs are never part of a number: `-1` is a minus token followed by a
/// number token.
pub struct Lexer<'a> {
    expr: &'a str,
    index: usize,
    has_failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from an expression.
    pub fn new(expr: &str) -> Lexer<'_> {
        Lexer {
            expr,
            index: 0,
            has_failed: false,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.expr.as_bytes().get(self.index).copied()
    }

    fn consume_whitespace(&mut self) {
        while let Some(b) = self.peek_byte() {
            match b {
                b' ' | b'\n' | b'\r' | b'\t' => {}
                _ => break,
            }

            self.index += 1;
        }
    }

    fn try_consume_single_char_token(&mut self) -> Option<Token> {
        let original_index = self.index;
        let kind = TokenKind::from_single_char(self.peek_byte()? as char)?;

        // consume the character
        self.index += 1;

        Some(Token {
            kind,
            index: original_index,
        })
    }

    fn try_consume_num(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut has_dot = false;
        let mut has_digit = false;

        while let Some(b) = self.peek_byte() {
            match b {
                b'0'..=b'9' => has_digit = true,

                // a second dot starts another number
                b'.' if !has_dot => has_dot = true,

                _ => break,
            }

            self.index += 1;
        }

        if !has_digit {
            self.index = original_index;
            return None;
        }

        Some(Token {
            kind: TokenKind::Num(self.expr[original_index..self.index].to_string()),
            index: original_index,
        })
    }
}

// This means that when it returns a none option, then it will keep returning
// none options.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed {
            return None;
        }

        self.consume_whitespace();

        // is there anything left?
        if self.index >= self.expr.len() {
            return None;
        }

        let original_index = self.index;
        let maybe_token = self
            .try_consume_single_char_token()
            .or_else(|| self.try_consume_num());

        Some(maybe_token.ok_or_else(|| {
            self.has_failed = true;

            // if we didn't get any token, then it is unknown
            LexerError {
                kind: LexerErrorKind::UnknownToken,
                index: original_index,
            }
        }))
    }
}

/// Reads the whole expression, failing on the first unknown token.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(expr).collect()
}
