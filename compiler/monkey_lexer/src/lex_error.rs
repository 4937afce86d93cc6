//! Lexer error type for callers that want a `Result`.
//!
//! The scanner itself never fails: unrecognized input comes back as
//! `Illegal` tokens. [`tokenize_strict`](crate::tokenize_strict) turns the
//! first such token into a [`LexError`].

use thiserror::Error;

use crate::{Token, TokenKind};

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// A character that starts no token. `offset` is its byte offset in
    /// the input.
    #[error("unrecognized character `{}` at byte {}", .text.escape_debug(), .offset)]
    UnrecognizedCharacter { text: String, offset: usize },
}

impl LexError {
    /// Build the error for an `Illegal` token that starts at `offset`.
    ///
    /// Returns `None` for any other kind.
    pub fn from_token(token: Token<'_>, offset: usize) -> Option<Self> {
        (token.kind == TokenKind::Illegal).then(|| LexError::UnrecognizedCharacter {
            text: token.text.to_owned(),
            offset,
        })
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnrecognizedCharacter { offset, .. } => *offset,
        }
    }
}
