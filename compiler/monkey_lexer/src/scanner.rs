//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner skips whitespace, then dispatches on the byte under the
//! cursor. Every arm calls a focused method that advances the cursor past
//! the bytes it consumed and returns the token. The sentinel byte (`0x00`)
//! at end of input dispatches to `Eof`, which does not advance.
//!
//! No construct needs more than one byte of lookahead: only `=` and `!`
//! peek, to tell `==` and `!=` apart from `=` and `!`.
//!
//! Errors are encoded as `Illegal` tokens, never as `Result::Err`. The
//! scanner never stops early; every input ends in exactly one `Eof`.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::token::{Token, TokenKind};

/// A source of tokens.
///
/// This is the single interface the parser consumes: call
/// [`next_token`](Lexer::next_token) until a token of kind
/// [`TokenKind::Eof`] comes back. [`Scanner`] is the production
/// implementation; tests and tools may supply others.
pub trait Lexer<'src> {
    /// Produce the next token, advancing past the bytes it covers.
    fn next_token(&mut self) -> Token<'src>;
}

/// Scanner over a single input string.
///
/// Owns its cursor exclusively and is mutated by every
/// [`next_token`](Scanner::next_token) call. Once `Eof` has been returned,
/// later calls keep returning `Eof`.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner primed on the first byte of `input`.
    pub fn new(input: &'src str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Byte offset of the cursor: the end of the last token produced.
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with empty text when the input is exhausted.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_whitespace();
        let start = self.cursor.position();
        let token = match self.cursor.current() {
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'+' => self.single(start, TokenKind::Plus),
            b'-' => self.single(start, TokenKind::Minus),
            b'*' => self.single(start, TokenKind::Asterisk),
            b'/' => self.single(start, TokenKind::Slash),
            b'<' => self.single(start, TokenKind::Lt),
            b'>' => self.single(start, TokenKind::Gt),
            b';' => self.single(start, TokenKind::Semicolon),
            b',' => self.single(start, TokenKind::Comma),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            0 if self.cursor.is_eof() => Token::eof(),
            b if is_letter(b) => self.identifier(start),
            b if is_digit(b) => self.number(start),
            _ => self.illegal(start),
        };
        trace!(kind = %token.kind, text = token.text, offset = start, "token");
        token
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    fn equal(&mut self, start: usize) -> Token<'src> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance(); // consume first '='
            self.single(start, TokenKind::Eq)
        } else {
            self.single(start, TokenKind::Assign)
        }
    }

    fn bang(&mut self, start: usize) -> Token<'src> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance(); // consume '!'
            self.single(start, TokenKind::NotEq)
        } else {
            self.single(start, TokenKind::Bang)
        }
    }

    // ─── Identifiers & Numbers ─────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_letter);
        let text = self.cursor.slice_from(start);
        Token::new(keywords::lookup_ident(text), text)
    }

    fn number(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_digit);
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Errors ────────────────────────────────────────────────────

    /// Unrecognized character: emit it whole as `Illegal`.
    ///
    /// Non-ASCII characters are consumed as one unit so the token text stays
    /// valid UTF-8. Interior null bytes land here too.
    fn illegal(&mut self, start: usize) -> Token<'src> {
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start);
        debug!(text, offset = start, "unrecognized character");
        Token::new(TokenKind::Illegal, text)
    }
}

impl<'src> Lexer<'src> for Scanner<'src> {
    #[inline]
    fn next_token(&mut self) -> Token<'src> {
        Scanner::next_token(self)
    }
}

/// Yields every token before `Eof`, then `None` forever.
impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = Scanner::next_token(self);
        (!token.is_eof()).then_some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Letters and underscore only. Digits end the run: `foo1` scans as `foo`
/// then `1`.
#[inline]
fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}
