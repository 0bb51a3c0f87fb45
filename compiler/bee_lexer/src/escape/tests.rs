use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_text_passes_through() {
    assert_eq!(unescape("hello"), Ok("hello".to_string()));
    assert_eq!(unescape(""), Ok(String::new()));
}

#[test]
fn known_escapes_resolve() {
    assert_eq!(unescape(r"a\nb"), Ok("a\nb".to_string()));
    assert_eq!(unescape(r"\t\r\0"), Ok("\t\r\0".to_string()));
    assert_eq!(unescape(r#"\\\'\""#), Ok("\\'\"".to_string()));
}

#[test]
fn unknown_escape_is_reported() {
    let err = unescape(r"ab\q").unwrap_err();
    assert_eq!(err, EscapeError { offset: 2, found: 'q' });
    assert_eq!(err.to_string(), r"invalid escape sequence '\q'");
}
