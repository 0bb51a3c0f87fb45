#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_kind_has_a_distinct_bit() {
    let mut seen = TokenType::empty();
    for (ty, _) in NAMES {
        assert_eq!(ty.bits().count_ones(), 1, "{} is not a single bit", ty.name());
        assert!(!seen.intersects(*ty), "{} overlaps", ty.name());
        seen |= *ty;
    }
}

#[test]
fn names_of_single_kinds() {
    assert_eq!(TokenType::DECLARE.name(), "::");
    assert_eq!(TokenType::ID.name(), "<Id>");
    assert_eq!(TokenType::NEWLINE.name(), "<NewLine>");
    assert_eq!(TokenType::empty().name(), "?");
    assert_eq!((TokenType::ADD | TokenType::SUB).name(), "?");
}

#[test]
fn operator_families() {
    assert!(TokenType::ARITHMETIC.contains(TokenType::SHIFT_L));
    assert!(!TokenType::ARITHMETIC.contains(TokenType::BIN_NOT));
    assert!(TokenType::LOGIC.contains(TokenType::AND));
    assert!(TokenType::LOGIC.contains(TokenType::GREATER_EQ));
    assert!(!TokenType::LOGIC.intersects(TokenType::ARITHMETIC));
    assert!(TokenType::BINARY.contains(TokenType::ASSIGN));
}

#[test]
fn kinds_are_listed_in_bit_order() {
    let set = TokenType::SCOPE_END | TokenType::NEWLINE | TokenType::COMMA;
    let names: Vec<&str> = set.kinds().map(TokenType::name).collect();
    assert_eq!(names, vec!["<NewLine>", "}", ","]);
    assert_eq!(format!("{set:?}"), "<NewLine> | } | ,");
}

#[test]
fn token_list_is_eof_terminated() {
    let source = "x";
    let list = TokenList::new(
        source,
        vec![Token::new("x", TokenType::ID, Span::new(0, 1))],
    )
    .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).ty, TokenType::ID);
    assert_eq!(list.get(1).ty, TokenType::EOF);
    assert_eq!(list.get(1).span, Span::new(1, 1));
    assert_eq!(list.get(99).ty, TokenType::EOF);
}
