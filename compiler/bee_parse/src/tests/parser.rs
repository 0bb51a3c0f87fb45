//! Node shapes and parser bookkeeping.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bee_ir::{BinaryOp, DefOp, EntityKind, ExprId, ExprKind, Order, TokenList, UnaryOp};
use pretty_assertions::assert_eq;

use crate::{parse_source, Construct, ParseOutput, Parser};

fn parse_ok(source: &str) -> ParseOutput {
    match parse_source(source) {
        Ok(output) => output,
        Err(err) => panic!("failed to parse {source:?}:\n{err}"),
    }
}

fn lex(source: &str) -> TokenList<'_> {
    bee_lexer::lex(source).unwrap()
}

fn kind(output: &ParseOutput, expr: ExprId) -> &ExprKind {
    &output.ast.expr(expr).kind
}

#[test]
fn empty_unit_has_empty_main_scope() {
    let output = parse_ok("");
    let scope = output.main_scope().unwrap();
    assert!(matches!(
        kind(&output, scope),
        ExprKind::Scope { body, frame } if body.is_empty() && *frame == output.ast.main_frame()
    ));
    assert!(output.top_level().is_empty());
}

#[test]
fn blank_lines_and_semicolons_add_no_nodes() {
    let output = parse_ok("\n\n;x :: 1;;\n\ny :: 2\n");
    assert_eq!(output.top_level().len(), 2);
}

#[test]
fn comma_chains_definitions() {
    let output = parse_ok("a: s32, b: s64");
    let [head] = output.top_level() else {
        panic!("expected one top-level node");
    };
    let ExprKind::Def { name, op, init, next, .. } = kind(&output, *head) else {
        panic!("expected a definition");
    };
    assert_eq!(name, "a");
    assert_eq!(*op, DefOp::Define);
    assert!(init.is_none());

    let second = next.unwrap();
    let ExprKind::Def { name, entity, next, .. } = kind(&output, second) else {
        panic!("expected a chained definition");
    };
    assert_eq!(name, "b");
    assert!(next.is_none());
    let ty = output.types.entity_type(&output.ast, *entity);
    assert_eq!(output.types.type_name(&output.ast, ty), "s64");
}

#[test]
fn comma_must_start_a_definition() {
    let err = parse_source("a: s32, 5").unwrap_err();
    assert!(err.to_string().contains("expected new definition after comma"));
}

#[test]
fn parameters_live_in_the_signature_frame() {
    let output = parse_ok("f :: (a: s32, b: f64) -> s8 { }");
    let [function] = output.top_level() else {
        panic!("expected one top-level node");
    };
    let ExprKind::Function { signature, scope, function, .. } = kind(&output, *function) else {
        panic!("expected a function");
    };
    let ExprKind::Signature { frame, ret, params } = kind(&output, *signature) else {
        panic!("expected a signature");
    };
    assert!(params.is_some());
    assert_eq!(output.types.type_name(&output.ast, *ret), "s8");

    let names: Vec<&str> = output.ast.frame(*frame).entries().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);

    // the body is parsed in the same frame
    assert!(matches!(kind(&output, *scope), ExprKind::Scope { frame: body, .. } if body == frame));

    let EntityKind::Function(entity) = &output.ast.entity(*function).kind else {
        panic!("expected a function entity");
    };
    assert_eq!(entity.params.len(), 2);
}

#[test]
fn parenthesised_value_is_nested() {
    let output = parse_ok("x :: (1 + 2)");
    let ExprKind::Def { init: Some(init), .. } = kind(&output, output.top_level()[0]) else {
        panic!("expected a definition");
    };
    let ExprKind::Nested(inner) = kind(&output, *init) else {
        panic!("expected a nested expression");
    };
    assert!(matches!(
        kind(&output, *inner),
        ExprKind::Binary { op: BinaryOp::Add, .. }
    ));
}

#[test]
fn empty_parens_are_a_signature() {
    let output = parse_ok("main :: () { }");
    let ExprKind::Function { signature, .. } = kind(&output, output.top_level()[0]) else {
        panic!("expected a function");
    };
    assert!(matches!(
        kind(&output, *signature),
        ExprKind::Signature { params: None, ret, .. } if *ret == output.types.void
    ));
}

#[test]
fn postfix_and_prefix_order() {
    let output = parse_ok("x: s32\nx++\n--x");
    let body = output.top_level();
    assert!(matches!(
        kind(&output, body[1]),
        ExprKind::Unary { op: UnaryOp::Increment, order: Order::Post, .. }
    ));
    assert!(matches!(
        kind(&output, body[2]),
        ExprKind::Unary { op: UnaryOp::Decrement, order: Order::Prev, .. }
    ));
}

#[test]
fn invoke_builds_argument_chain() {
    let output = parse_ok("add :: (a: s32, b: s32) -> s32 { return a + b }\nadd(1, 2)");
    let ExprKind::Invoke { args, .. } = kind(&output, output.top_level()[1]) else {
        panic!("expected an invocation");
    };
    let mut values = Vec::new();
    let mut cursor = *args;
    while let Some(arg) = cursor {
        let ExprKind::Argument { expr, next } = kind(&output, arg) else {
            panic!("expected an argument");
        };
        if let ExprKind::Int { value, .. } = kind(&output, *expr) {
            values.push(*value);
        }
        cursor = *next;
    }
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn spans_cover_the_definition() {
    let source = "value :: 42";
    let output = parse_ok(source);
    let span = output.ast.expr(output.top_level()[0]).span;
    assert_eq!(&source[span.start as usize..span.end as usize], source);
}

#[test]
fn parser_state_is_restored_after_a_unit() {
    let source = "s :: struct { v: s32 }\nf :: () { if 1 < 2 { } else { } }\nfor i: s32 = 0; i < 3; i++ { }";
    let tokens = lex(source);
    let mut parser = Parser::new(&tokens);
    parser.parse_program().unwrap();
    assert!(parser.constructs.is_empty());
    assert_eq!(parser.ast.current_frame(), parser.ast.main_frame());
    assert_eq!(parser.ast.depth(), 0);
}

#[test]
fn record_hides_enclosing_function() {
    let tokens = lex("");
    let mut parser = Parser::new(&tokens);
    assert_eq!(parser.enclosing_function(), None);

    let function = parser.types.void;
    parser.constructs.push(Construct::Function(function));
    assert_eq!(parser.enclosing_function(), Some(function));

    parser.constructs.push(Construct::Record);
    assert_eq!(parser.enclosing_function(), None);
}

#[test]
fn failed_unit_reports_first_error_only() {
    let err = parse_source("a :: b\nc :: d").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'b'"));
    assert!(!message.contains("'d'"));
}
