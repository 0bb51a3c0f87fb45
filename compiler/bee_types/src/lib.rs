//! Built-in types and static typing for Bee.
//!
//! [`TypeSystem`] installs the built-in atoms into the main frame and answers
//! the questions the parser asks while building the tree:
//!
//! - what type does this entity or expression have ([`TypeSystem::entity_type`],
//!   [`TypeSystem::expr_type`])
//! - how well does one type convert into another ([`TypeSystem::cast`])
//! - which atom results from mixing two atoms ([`TypeSystem::compose_atom`])

mod cast;
mod signature;

use bee_ir::{Ast, AtomDesc, Entity, EntityId, EntityKind, ExprId, ExprKind};
use bee_stack::ensure_sufficient_stack;
use tracing::debug;

pub use cast::TypeCast;
pub use signature::signature_name;

const POINTER_SIZE: u32 = std::mem::size_of::<usize>() as u32;

/// Atoms that arithmetic composition can produce, in lookup order.
const COMPOSABLE: [(&str, AtomDesc, u32); 11] = [
    ("f16", AtomDesc::FLOAT, 2),
    ("f32", AtomDesc::FLOAT, 4),
    ("f64", AtomDesc::FLOAT, 8),
    ("s8", AtomDesc::SIGNED, 1),
    ("s16", AtomDesc::SIGNED, 2),
    ("s32", AtomDesc::SIGNED, 4),
    ("s64", AtomDesc::SIGNED, 8),
    ("u8", AtomDesc::RAW, 1),
    ("u16", AtomDesc::RAW, 2),
    ("u32", AtomDesc::RAW, 4),
    ("u64", AtomDesc::RAW, 8),
];

/// Handles of the built-in types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSystem {
    pub f16: EntityId,
    pub f32: EntityId,
    pub f64: EntityId,
    pub s8: EntityId,
    pub s16: EntityId,
    pub s32: EntityId,
    pub s64: EntityId,
    pub u8: EntityId,
    pub u16: EntityId,
    pub u32: EntityId,
    pub u64: EntityId,
    pub char: EntityId,
    pub ssize: EntityId,
    pub usize: EntityId,
    pub void: EntityId,
    pub bool: EntityId,
}

impl TypeSystem {
    /// Install the built-ins into the current frame of `ast` (normally the main frame).
    pub fn install(ast: &mut Ast) -> Self {
        let void = ast.install(Entity::void("void"));
        let [f16, f32, f64, s8, s16, s32, s64, u8, u16, u32, u64] =
            COMPOSABLE.map(|(name, desc, size)| ast.install(Entity::atom(name, desc, size)));
        let char = ast.install(Entity::atom("char", AtomDesc::SIGNED, 1));
        let ssize = ast.install(Entity::atom("ssize", AtomDesc::SIGNED, POINTER_SIZE));
        let usize = ast.install(Entity::atom("usize", AtomDesc::RAW, POINTER_SIZE));
        let bool = ast.install(Entity::atom("bool", AtomDesc::RAW, 1));
        debug!(frame = ?ast.current_frame(), "installed built-in types");

        TypeSystem {
            f16,
            f32,
            f64,
            s8,
            s16,
            s32,
            s64,
            u8,
            u16,
            u32,
            u64,
            char,
            ssize,
            usize,
            void,
            bool,
        }
    }

    /// The fourteen built-in atoms, `bool` excluded.
    pub fn atoms(&self) -> [EntityId; 14] {
        [
            self.f16, self.f32, self.f64, self.s8, self.s16, self.s32, self.s64, self.u8,
            self.u16, self.u32, self.u64, self.char, self.ssize, self.usize,
        ]
    }

    fn composable(&self) -> [EntityId; 11] {
        [
            self.f16, self.f32, self.f64, self.s8, self.s16, self.s32, self.s64, self.u8,
            self.u16, self.u32, self.u64,
        ]
    }

    /// The type an entity denotes: itself for types, the declared type for variables.
    pub fn entity_type(&self, ast: &Ast, entity: EntityId) -> EntityId {
        let entity_ref = ast.entity(entity);
        match &entity_ref.kind {
            EntityKind::Var(var) => var.ty,
            _ if entity_ref.is_type_like() => entity,
            _ => self.void,
        }
    }

    /// Name of the type an entity denotes.
    pub fn type_name<'a>(&self, ast: &'a Ast, entity: EntityId) -> &'a str {
        &ast.entity(self.entity_type(ast, entity)).name
    }

    /// Static type of an expression.
    pub fn expr_type(&self, ast: &Ast, expr: ExprId) -> EntityId {
        match &ast.expr(expr).kind {
            ExprKind::Unary { ty, .. } | ExprKind::Binary { ty, .. } => *ty,
            ExprKind::Nested(expr) => ensure_sufficient_stack(|| self.expr_type(ast, *expr)),
            ExprKind::Id { entity, .. } => {
                entity.map_or(self.void, |entity| self.entity_type(ast, entity))
            }
            ExprKind::Def { entity, .. }
            | ExprKind::Typedef { entity, .. }
            | ExprKind::Member { entity, .. }
            | ExprKind::Function {
                function: entity, ..
            } => self.entity_type(ast, *entity),
            ExprKind::Char(_) => self.char,
            ExprKind::Int { size, .. } => self
                .compose_atom(ast, AtomDesc::SIGNED, *size)
                .unwrap_or(self.void),
            ExprKind::Float { size, .. } => self
                .compose_atom(ast, AtomDesc::FLOAT, *size)
                .unwrap_or(self.void),
            ExprKind::Bool(_) => self.bool,
            ExprKind::Invoke { function, .. } => ast
                .entity(*function)
                .as_function()
                .map_or(self.void, |function| function.ret),
            ExprKind::StructLit { ty, .. } => *ty,
            _ => self.void,
        }
    }

    /// Built-in atom with the dominant kind of `desc` and exactly `size` bytes.
    pub fn compose_atom(&self, ast: &Ast, desc: AtomDesc, size: u32) -> Option<EntityId> {
        let desc = desc.dominant();
        self.composable().into_iter().find(|id| {
            ast.entity(*id)
                .as_atom()
                .is_some_and(|atom| atom.desc == desc && atom.size == size)
        })
    }
}
