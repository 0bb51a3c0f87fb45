//! Expression tree nodes.
//!
//! Nodes are stored in the [`Ast`](crate::Ast) expression arena and refer to
//! each other, to entities and to frames only through handles.

use crate::{EntityId, ExprId, FrameId, Span, TokenType};

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Char(u8),
    Str(String),
    Int {
        value: u64,
        size: u32,
    },
    Float {
        value: f64,
        size: u32,
    },
    Bool(bool),

    /// `ty` is the operand type, recorded so typing never walks the chain.
    Unary {
        op: UnaryOp,
        order: Order,
        ty: EntityId,
        expr: ExprId,
    },
    /// `ty` is the result type computed when the node was built.
    Binary {
        op: BinaryOp,
        ty: EntityId,
        prev: ExprId,
        post: ExprId,
    },
    Nested(ExprId),
    Scope {
        body: Vec<ExprId>,
        frame: FrameId,
    },
    Return {
        expr: Option<ExprId>,
        function: EntityId,
    },

    /// Identifier use. `entity` is `None` only at a definition site for a fresh name.
    Id {
        name: String,
        entity: Option<EntityId>,
    },
    /// Variable definition; `next` chains co-declared definitions (`a: s32, b: s32`).
    Def {
        name: String,
        op: DefOp,
        init: Option<ExprId>,
        entity: EntityId,
        next: Option<ExprId>,
    },
    /// Parameter list (head of a `Def` chain) and return type.
    Signature {
        params: Option<ExprId>,
        ret: EntityId,
        frame: FrameId,
    },
    Function {
        name: String,
        function: EntityId,
        signature: ExprId,
        scope: ExprId,
    },
    Invoke {
        callee: ExprId,
        function: EntityId,
        args: Option<ExprId>,
    },
    /// One bound argument; `next` links to the following one.
    Argument {
        expr: ExprId,
        next: Option<ExprId>,
    },

    If {
        cond: ExprId,
        then_scope: ExprId,
        else_scope: Option<ExprId>,
        frame: FrameId,
    },
    For {
        init: ExprId,
        cond: ExprId,
        step: ExprId,
        scope: ExprId,
        frame: FrameId,
    },
    ForWhile {
        cond: ExprId,
        scope: ExprId,
        frame: FrameId,
    },

    /// Anonymous `struct { .. }` / `enum { .. }` body.
    Record {
        kind: RecordKind,
        body: Vec<ExprId>,
        frame: FrameId,
    },
    /// A record bound to a name.
    Typedef {
        name: String,
        op: DefOp,
        record: ExprId,
        entity: EntityId,
    },
    Member {
        base: ExprId,
        name: String,
        entity: EntityId,
    },
    /// Positional struct literal `Name{a, b}`; `args` chains `Argument` nodes.
    StructLit {
        ty: EntityId,
        args: Option<ExprId>,
    },
}

impl ExprKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Char(_) => "Char_Expr",
            ExprKind::Str(_) => "Str_Expr",
            ExprKind::Int { .. } => "Int_Expr",
            ExprKind::Float { .. } => "Float_Expr",
            ExprKind::Bool(_) => "Bool_Expr",
            ExprKind::Unary { .. } => "Unary_Expr",
            ExprKind::Binary { .. } => "Binary_Expr",
            ExprKind::Nested(_) => "Nested_Expr",
            ExprKind::Scope { .. } => "Scope_Expr",
            ExprKind::Return { .. } => "Return_Expr",
            ExprKind::Id { .. } => "Id_Expr",
            ExprKind::Def { .. } => "Def_Expr",
            ExprKind::Signature { .. } => "Signature_Expr",
            ExprKind::Function { .. } => "Function_Expr",
            ExprKind::Invoke { .. } => "Invoke_Expr",
            ExprKind::Argument { .. } => "Argument_Expr",
            ExprKind::If { .. } => "If_Expr",
            ExprKind::For { .. } => "For_Expr",
            ExprKind::ForWhile { .. } => "For_While_Expr",
            ExprKind::Record { .. } => "Record_Expr",
            ExprKind::Typedef { .. } => "Typedef_Expr",
            ExprKind::Member { .. } => "Member_Expr",
            ExprKind::StructLit { .. } => "Struct_Lit_Expr",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    Increment,
    Decrement,
}

impl UnaryOp {
    pub fn from_token(ty: TokenType) -> Option<Self> {
        const TABLE: [(TokenType, UnaryOp); 6] = [
            (TokenType::ADD, UnaryOp::Plus),
            (TokenType::SUB, UnaryOp::Neg),
            (TokenType::NOT, UnaryOp::Not),
            (TokenType::BIN_NOT, UnaryOp::BitNot),
            (TokenType::INCREMENT, UnaryOp::Increment),
            (TokenType::DECREMENT, UnaryOp::Decrement),
        ];
        TABLE.iter().find(|(t, _)| *t == ty).map(|(_, op)| *op)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        }
    }
}

/// Whether a unary operator precedes or follows its operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Prev,
    Post,
}

impl Order {
    pub const fn name(self) -> &'static str {
        match self {
            Order::Prev => "prev",
            Order::Post => "post",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpFamily {
    Assign,
    Arithmetic,
    Logic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

impl BinaryOp {
    pub fn from_token(ty: TokenType) -> Option<Self> {
        const TABLE: [(TokenType, BinaryOp); 19] = [
            (TokenType::ASSIGN, BinaryOp::Assign),
            (TokenType::AND, BinaryOp::And),
            (TokenType::OR, BinaryOp::Or),
            (TokenType::ADD, BinaryOp::Add),
            (TokenType::SUB, BinaryOp::Sub),
            (TokenType::MUL, BinaryOp::Mul),
            (TokenType::DIV, BinaryOp::Div),
            (TokenType::MOD, BinaryOp::Mod),
            (TokenType::BIN_AND, BinaryOp::BitAnd),
            (TokenType::BIN_OR, BinaryOp::BitOr),
            (TokenType::BIN_XOR, BinaryOp::BitXor),
            (TokenType::SHIFT_L, BinaryOp::Shl),
            (TokenType::SHIFT_R, BinaryOp::Shr),
            (TokenType::EQ, BinaryOp::Eq),
            (TokenType::NOT_EQ, BinaryOp::NotEq),
            (TokenType::LESS, BinaryOp::Less),
            (TokenType::LESS_EQ, BinaryOp::LessEq),
            (TokenType::GREATER, BinaryOp::Greater),
            (TokenType::GREATER_EQ, BinaryOp::GreaterEq),
        ];
        TABLE.iter().find(|(t, _)| *t == ty).map(|(_, op)| *op)
    }

    pub const fn family(self) -> OpFamily {
        match self {
            BinaryOp::Assign => OpFamily::Assign,
            BinaryOp::Add
            | BinaryOp::Sub
            | BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Mod
            | BinaryOp::BitAnd
            | BinaryOp::BitOr
            | BinaryOp::BitXor
            | BinaryOp::Shl
            | BinaryOp::Shr => OpFamily::Arithmetic,
            BinaryOp::And
            | BinaryOp::Or
            | BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Less
            | BinaryOp::LessEq
            | BinaryOp::Greater
            | BinaryOp::GreaterEq => OpFamily::Logic,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
        }
    }
}

/// `::` declares a constant, `:` defines a variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefOp {
    Declare,
    Define,
}

impl DefOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            DefOp::Declare => "::",
            DefOp::Define => ":",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Struct,
    Enum,
}

impl RecordKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            RecordKind::Struct => "struct",
            RecordKind::Enum => "enum",
        }
    }
}

#[cfg(test)]
mod tests;
