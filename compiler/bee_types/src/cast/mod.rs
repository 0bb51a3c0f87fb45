//! Cast classification between types.

use std::fmt;

use bee_ir::{Ast, Atom, EntityId, EntityKind, FrameId};
use bee_stack::ensure_sufficient_stack;

use crate::TypeSystem;

/// How well a value of one type converts into another, best first.
///
/// Call sites treat anything at or above [`TypeCast::Transmuted`] as a type error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeCast {
    Same,
    /// Widening: the source has the smaller range.
    Inferred,
    /// The source has the larger range.
    Narrowed,
    /// Crosses the raw/signed/float boundary.
    Transmuted,
    /// Different kinds of entity.
    Error,
}

impl TypeCast {
    /// Whether the conversion is accepted without an explicit cast.
    #[inline]
    pub fn is_implicit(self) -> bool {
        self < TypeCast::Transmuted
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeCast::Same => "same",
            TypeCast::Inferred => "inferred",
            TypeCast::Narrowed => "narrowed",
            TypeCast::Transmuted => "transmuted",
            TypeCast::Error => "error",
        }
    }
}

impl fmt::Display for TypeCast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn cast_atom(from: Atom, into: Atom) -> TypeCast {
    if from.desc.dominant() != into.desc.dominant() {
        TypeCast::Transmuted
    } else if from.size > into.size {
        TypeCast::Narrowed
    } else if from.size < into.size {
        TypeCast::Inferred
    } else {
        TypeCast::Same
    }
}

impl TypeSystem {
    /// Classify converting `from` into `into`. Variables cast through their type.
    pub fn cast(&self, ast: &Ast, from: EntityId, into: EntityId) -> TypeCast {
        let from = self.entity_type(ast, from);
        let into = self.entity_type(ast, into);
        if from == into {
            return TypeCast::Same;
        }

        match (&ast.entity(from).kind, &ast.entity(into).kind) {
            (EntityKind::Void, EntityKind::Void) => TypeCast::Same,
            (EntityKind::Atom(a), EntityKind::Atom(b)) => cast_atom(*a, *b),
            (EntityKind::Function(f), EntityKind::Function(g)) => {
                if f.params.len() != g.params.len() {
                    return TypeCast::Error;
                }
                let same = self.cast(ast, f.ret, g.ret) == TypeCast::Same
                    && f.params
                        .iter()
                        .zip(&g.params)
                        .all(|(a, b)| self.cast(ast, *a, *b) == TypeCast::Same);
                if same {
                    TypeCast::Same
                } else {
                    TypeCast::Error
                }
            }
            (EntityKind::Struct(a), EntityKind::Struct(b))
            | (EntityKind::Enum(a), EntityKind::Enum(b)) => {
                ensure_sufficient_stack(|| self.cast_members(ast, a.frame, b.frame))
            }
            _ => TypeCast::Error,
        }
    }

    /// Records are the same when their member variables match positionally.
    fn cast_members(&self, ast: &Ast, from: FrameId, into: FrameId) -> TypeCast {
        let members = |frame: FrameId| -> Vec<EntityId> {
            ast.frame(frame)
                .entities()
                .filter(|id| ast.entity(*id).as_var().is_some())
                .collect()
        };
        let (from, into) = (members(from), members(into));
        let same = from.len() == into.len()
            && from
                .iter()
                .zip(&into)
                .all(|(a, b)| self.cast(ast, *a, *b) == TypeCast::Same);
        if same {
            TypeCast::Same
        } else {
            TypeCast::Error
        }
    }
}

#[cfg(test)]
mod tests;
