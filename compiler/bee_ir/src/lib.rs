//! Bee intermediate representation.
//!
//! Everything the parser produces lives in arenas owned by [`Ast`] and is
//! referenced by `u32` handles:
//!
//! - [`ExprId`] indexes the expression tree ([`Expr`], [`ExprKind`])
//! - [`EntityId`] indexes named things: variables, functions and types ([`Entity`])
//! - [`FrameId`] indexes lexical scopes ([`Frame`])
//!
//! Handles stay valid for the lifetime of the [`Ast`]; nothing is freed
//! until the whole tree is dropped.

mod arena;
mod ast;
mod dump;
mod entity;
mod expr;
mod frame;
mod ids;
mod span;
mod token;

pub use arena::{Arena, ArenaError, ArenaId, DynArena};
pub use ast::{Ast, AstError, FRAME_DEPTH_LIMIT};
pub use dump::AstDump;
pub use entity::{Atom, AtomDesc, Entity, EntityKind, EntityTag, Function, Record, Var};
pub use expr::{BinaryOp, DefOp, Expr, ExprKind, OpFamily, Order, RecordKind, UnaryOp};
pub use frame::Frame;
pub use ids::{EntityId, ExprId, FrameId};
pub use span::{Span, SpanError};
pub use token::{Token, TokenList, TokenType};
