use super::*;
use pretty_assertions::assert_eq;

#[test]
fn binary_ops_map_from_every_binary_token() {
    for ty in TokenType::BINARY.kinds() {
        let op = BinaryOp::from_token(ty);
        assert!(op.is_some(), "no binary op for {}", ty.name());
    }
    assert_eq!(BinaryOp::from_token(TokenType::BIN_NOT), None);
    assert_eq!(BinaryOp::from_token(TokenType::ID), None);
}

#[test]
fn binary_families_follow_token_masks() {
    for ty in TokenType::BINARY.kinds() {
        let Some(op) = BinaryOp::from_token(ty) else {
            continue;
        };
        let expected = if ty == TokenType::ASSIGN {
            OpFamily::Assign
        } else if TokenType::ARITHMETIC.contains(ty) {
            OpFamily::Arithmetic
        } else {
            OpFamily::Logic
        };
        assert_eq!(op.family(), expected, "{}", ty.name());
    }
}

#[test]
fn symbols() {
    assert_eq!(BinaryOp::Shl.symbol(), "<<");
    assert_eq!(UnaryOp::Decrement.symbol(), "--");
    assert_eq!(UnaryOp::from_token(TokenType::BIN_NOT), Some(UnaryOp::BitNot));
    assert_eq!(DefOp::Declare.symbol(), "::");
    assert_eq!(Order::Post.name(), "post");
    assert_eq!(RecordKind::Enum.keyword(), "enum");
}

#[test]
fn kind_names() {
    let scope = ExprKind::Scope {
        body: Vec::new(),
        frame: FrameId::new(0),
    };
    assert_eq!(scope.name(), "Scope_Expr");
    assert_eq!(ExprKind::Bool(true).name(), "Bool_Expr");
}
