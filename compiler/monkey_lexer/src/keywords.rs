//! Reserved keyword resolution.
//!
//! Keywords are resolved after the scanner has read an identifier-shaped
//! run. Matching is exact and case-sensitive: `let` is a keyword, `Let` and
//! `lett` are identifiers.
//!
//! The lookup uses the run's length as a first-pass filter (keywords are
//! 2-6 bytes), then compares against the keywords of that length only.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for anything that is not exactly one of
/// `fn`, `let`, `true`, `false`, `if`, `else`, `return`.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}

/// Classify an identifier-shaped run: its keyword kind, or `Ident`.
#[inline]
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests;
