#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scan_consumes_only_on_match() {
    let tokens = bee_lexer::lex("x :: 1").unwrap();
    let mut cursor = Cursor::new(&tokens);

    let miss = cursor.scan(TokenType::INT);
    assert!(!miss.ok);
    assert_eq!(miss.token.text, "x");
    assert_eq!(cursor.position(), 0);

    let hit = cursor.scan(TokenType::ID | TokenType::INT);
    assert!(hit.ok);
    assert_eq!(hit.token.ty, TokenType::ID);
    assert_eq!(cursor.position(), 1);

    assert!(cursor.peek(TokenType::DECLARE).ok);
    assert_eq!(cursor.position(), 1);
}

#[test]
fn eof_is_sticky() {
    let tokens = bee_lexer::lex("1").unwrap();
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.eof());
    assert!(cursor.scan(TokenType::INT).ok);
    assert!(cursor.eof());
    assert!(cursor.scan(TokenType::EOF).ok);
    assert!(cursor.eof());
    assert_eq!(cursor.current().ty, TokenType::EOF);
}

#[test]
fn skip_newlines_stops_at_content() {
    let tokens = bee_lexer::lex("\n\n\nx").unwrap();
    let mut cursor = Cursor::new(&tokens);
    cursor.skip_newlines();
    assert_eq!(cursor.current().text, "x");
}

#[test]
fn expected_lists_every_accepted_kind() {
    let tokens = bee_lexer::lex("x").unwrap();
    let cursor = Cursor::new(&tokens);
    let err = cursor.expected(
        cursor.current(),
        TokenType::SEMICOLON | TokenType::NEWLINE | TokenType::SCOPE_END,
    );
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(
        err.description,
        "expected '<NewLine>', '}', ';', got '<Id>'"
    );
    assert_eq!(err.category, Error::PARSER);
}
