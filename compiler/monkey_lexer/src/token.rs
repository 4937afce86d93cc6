//! Token kinds and the borrowed `Token` value handed to the parser.

use std::fmt;

/// Token kinds for Monkey.
///
/// The set is closed. Keyword kinds (`Function` through `Return`) are never
/// produced by character dispatch, only by keyword lookup on an
/// identifier-shaped run.
///
/// `#[repr(u8)]` keeps the kind to a single byte so `Token` stays two words
/// plus a tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Errors & Control ===
    Illegal,
    Eof,

    // === Identifiers & Literals ===
    Ident,
    Int,

    // === Operators ===
    Assign,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Bang,
    Eq,
    NotEq,
    Lt,
    Gt,

    // === Delimiters ===
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // === Keywords ===
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Canonical type name, as printed in token dumps and parser errors.
    ///
    /// Operators and delimiters are named by their literal, keywords and
    /// the four value-carrying kinds by an upper-case tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            // Fixed-text kinds are named by their lexeme.
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        }
    }

    /// Fixed source text for this kind, if every token of the kind has the
    /// same text.
    ///
    /// Returns `None` for `Illegal`, `Eof`, `Ident`, and `Int`, whose text
    /// depends on the input.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Illegal | TokenKind::Eof | TokenKind::Ident | TokenKind::Int => None,
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            _ => Some(self.as_str()),
        }
    }

    /// Returns `true` for the reserved words produced by keyword lookup.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns `true` for arithmetic, comparison, and assignment operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Bang
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
        )
    }

    /// Returns `true` for punctuation: separators and brackets.
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token: its kind plus the exact source text it covers.
///
/// The text borrows from the scanner's input, so producing a token never
/// allocates. `Eof` carries empty text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    #[inline]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
