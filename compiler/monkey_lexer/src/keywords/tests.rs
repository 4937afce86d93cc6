use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_reserved_keyword_resolves() {
    assert_eq!(lookup("fn"), Some(TokenKind::Function));
    assert_eq!(lookup("let"), Some(TokenKind::Let));
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("return"), Some(TokenKind::Return));
}

#[test]
fn lookup_agrees_with_lexeme() {
    for kind in [
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ] {
        let text = kind.lexeme().unwrap_or_default();
        assert_eq!(lookup(text), Some(kind), "lexeme {text:?}");
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("Let"), None);
    assert_eq!(lookup("LET"), None);
    assert_eq!(lookup("True"), None);
    assert_eq!(lookup("Fn"), None);
}

#[test]
fn no_prefix_or_extension_matches() {
    assert_eq!(lookup("lett"), None);
    assert_eq!(lookup("le"), None);
    assert_eq!(lookup("f"), None);
    assert_eq!(lookup("fnn"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("elsewhere"), None);
}

#[test]
fn names_from_other_languages_are_identifiers() {
    assert_eq!(lookup("function"), None);
    assert_eq!(lookup("var"), None);
    assert_eq!(lookup("while"), None);
    assert_eq!(lookup("null"), None);
}

#[test]
fn empty_text_is_not_a_keyword() {
    assert_eq!(lookup(""), None);
}

#[test]
fn lookup_ident_falls_back_to_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("lett"), TokenKind::Ident);
    assert_eq!(lookup_ident("five"), TokenKind::Ident);
    assert_eq!(lookup_ident("_"), TokenKind::Ident);
}
