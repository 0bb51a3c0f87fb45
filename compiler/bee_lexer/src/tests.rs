#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn types(source: &str) -> Vec<TokenType> {
    lex(source).unwrap().iter().map(|t| t.ty).collect()
}

fn texts(source: &str) -> Vec<&str> {
    lex(source).unwrap().iter().map(|t| t.text).collect()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(types(""), vec![TokenType::EOF]);
    assert_eq!(types("   \t  // nothing here"), vec![TokenType::EOF]);
}

#[test]
fn definition_line() {
    assert_eq!(
        types("x :: 1\n"),
        vec![
            TokenType::ID,
            TokenType::DECLARE,
            TokenType::INT_DEC,
            TokenType::NEWLINE,
            TokenType::EOF,
        ]
    );
    assert_eq!(texts("y := 2"), vec!["y", ":", "=", "2", ""]);
}

#[test]
fn keywords_beat_identifiers_only_on_exact_match() {
    assert_eq!(
        types("if iffy return returned"),
        vec![
            TokenType::IF,
            TokenType::ID,
            TokenType::RETURN,
            TokenType::ID,
            TokenType::EOF,
        ]
    );
}

#[test]
fn numeric_literals() {
    assert_eq!(
        types("42 0b101 0xFF 1.5 .25 3. 1.0e10"),
        vec![
            TokenType::INT_DEC,
            TokenType::INT_BIN,
            TokenType::INT_HEX,
            TokenType::FLOAT,
            TokenType::FLOAT,
            TokenType::FLOAT,
            TokenType::FLOAT,
            TokenType::EOF,
        ]
    );
}

#[test]
fn longest_operator_wins() {
    assert_eq!(
        texts("a->b :: c ++ <= >> != && ||"),
        vec!["a", "->", "b", "::", "c", "++", "<=", ">>", "!=", "&&", "||", ""]
    );
    assert_eq!(
        types("&& and || or"),
        vec![
            TokenType::AND,
            TokenType::AND,
            TokenType::OR,
            TokenType::OR,
            TokenType::EOF,
        ]
    );
}

#[test]
fn string_and_char_literals_keep_quotes() {
    assert_eq!(texts(r#""a\"b" 'c' '\n'"#), vec![r#""a\"b""#, "'c'", r"'\n'", ""]);
}

#[test]
fn spans_are_byte_offsets() {
    let tokens = lex("ab  cd").unwrap();
    assert_eq!(tokens.get(0).span, Span::new(0, 2));
    assert_eq!(tokens.get(1).span, Span::new(4, 6));
    assert_eq!(tokens.get(2).span, Span::new(6, 6));
}

#[test]
fn unrecognized_character_is_a_lexical_error() {
    let err = lex("x :: $").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.category, "scanner error");
    assert_eq!(err.description, "unrecognized token '$'");
    assert_eq!(err.span, Some(Span::new(5, 6)));
}

#[test]
fn unterminated_string_is_rejected() {
    let err = lex("s :: \"abc\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
}
