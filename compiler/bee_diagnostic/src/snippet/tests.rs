use super::*;
use pretty_assertions::assert_eq;

#[test]
fn line_lookup_is_one_based() {
    let source = "ab\ncd\n\nef";
    let table = LineTable::build(source);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.line_col(source, 0), (1, 1));
    assert_eq!(table.line_col(source, 1), (1, 2));
    assert_eq!(table.line_col(source, 3), (2, 1));
    assert_eq!(table.line_col(source, 6), (3, 1));
    assert_eq!(table.line_col(source, 8), (4, 2));
}

#[test]
fn line_text_strips_terminators() {
    let source = "one\r\ntwo\nthree";
    let table = LineTable::build(source);
    assert_eq!(table.line_text(source, 1), "one");
    assert_eq!(table.line_text(source, 2), "two");
    assert_eq!(table.line_text(source, 3), "three");
    assert_eq!(table.line_text(source, 0), "");
    assert_eq!(table.line_text(source, 9), "");
}

#[test]
fn caret_run_matches_token_width() {
    let source = "a :: b + foo";
    let out = render(source, Span::new(9, 12), "use of unknown identifier 'foo'");
    assert_eq!(
        out,
        "with {\n  1 | a :: b + foo\n               ^^^ use of unknown identifier 'foo'\n}"
    );
}

#[test]
fn empty_span_still_gets_a_caret() {
    let source = "f(";
    let out = render(source, Span::new(2, 2), "expected ')', got '<Eof>'");
    assert_eq!(
        out,
        "with {\n  1 | f(\n        ^ expected ')', got '<Eof>'\n}"
    );
}

#[test]
fn wide_line_numbers_shift_the_caret() {
    let source = "\n".repeat(11) + "zz";
    let out = render(&source, Span::new(11, 12), "here");
    assert_eq!(out, "with {\n  12 | zz\n       ^ here\n}");
}
