//! Scanner for the Monkey scripting language.
//!
//! Converts source text into [`Token`]s one at a time. The parser drives the
//! scanner through the [`Lexer`] trait, calling
//! [`next_token`](Lexer::next_token) until it sees [`TokenKind::Eof`].
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().text, "five");
//! ```
//!
//! # Architecture
//!
//! - [`Cursor`]: byte cursor with a `0x00` sentinel past the end of input
//! - [`Scanner`]: whitespace skipping, dispatch, and maximal-munch runs
//! - [`keywords`]: reserved word lookup on identifier-shaped runs
//! - [`LexError`]: `Result`-level error for [`tokenize_strict`]
//!
//! The token set is fixed: no string literals, floats, comments, or Unicode
//! identifiers. Anything outside it scans as [`TokenKind::Illegal`].
//!
//! # Debugging
//!
//! The scanner emits `tracing` events. The library installs no subscriber;
//! in tests and benches, enable output with:
//! - `RUST_LOG=monkey_lexer=debug`: one event per illegal character
//! - `RUST_LOG=monkey_lexer=trace`: one event per token (very verbose)

mod cursor;
pub mod keywords;
mod lex_error;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use scanner::{Lexer, Scanner};
pub use token::{Token, TokenKind};

/// Drain a lexer, collecting every token up to and including `Eof`.
pub fn collect_tokens<'src>(lexer: &mut impl Lexer<'src>) -> Vec<Token<'src>> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}

/// Scan `input` to completion. The last token is always `Eof`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    collect_tokens(&mut Scanner::new(input))
}

/// Scan `input` to completion, failing on the first unrecognized character.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        // Illegal tokens end exactly at the cursor.
        if let Some(err) = LexError::from_token(token, scanner.offset() - token.text.len()) {
            return Err(err);
        }
        tokens.push(token);
        if token.is_eof() {
            return Ok(tokens);
        }
    }
}
