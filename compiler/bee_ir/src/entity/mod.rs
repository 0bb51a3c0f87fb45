//! Named semantic definitions: variables, functions and types.

use bitflags::bitflags;

use crate::{EntityId, FrameId};

bitflags! {
    /// Atom descriptor. The empty set is `raw`; OR-ing two descriptors picks
    /// the dominant one (float over signed over raw).
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
    pub struct AtomDesc: u32 {
        const SIGNED = 1 << 0;
        const FLOAT = 1 << 1;
    }
}

impl AtomDesc {
    pub const RAW: AtomDesc = AtomDesc::empty();

    /// Collapse a composed descriptor to the dominant single kind.
    #[must_use]
    pub fn dominant(self) -> AtomDesc {
        if self.contains(AtomDesc::FLOAT) {
            AtomDesc::FLOAT
        } else if self.contains(AtomDesc::SIGNED) {
            AtomDesc::SIGNED
        } else {
            AtomDesc::RAW
        }
    }

    pub fn name(self) -> &'static str {
        if self.contains(AtomDesc::FLOAT) {
            "float"
        } else if self.contains(AtomDesc::SIGNED) {
            "signed"
        } else {
            "raw"
        }
    }
}

/// Built-in scalar type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    pub desc: AtomDesc,
    pub size: u32,
}

/// A variable. `begin..end` is a liveness interval filled in by backends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Var {
    pub ty: EntityId,
    pub begin: u32,
    pub end: u32,
}

impl Var {
    pub const fn new(ty: EntityId) -> Self {
        Var { ty, begin: 0, end: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    /// Parameter variables in declaration order.
    pub params: Vec<EntityId>,
    pub ret: EntityId,
}

/// Struct or enum body: members live in their own frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub frame: FrameId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Var(Var),
    Function(Function),
    Void,
    Atom(Atom),
    Struct(Record),
    Enum(Record),
}

/// Discriminant of [`EntityKind`], used for capability checks and messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Var,
    Function,
    Void,
    Atom,
    Struct,
    Enum,
}

impl EntityTag {
    /// Whether the entity can appear where a type is expected.
    #[inline]
    pub const fn is_type_like(self) -> bool {
        !self.is_value_like()
    }

    #[inline]
    pub const fn is_value_like(self) -> bool {
        matches!(self, EntityTag::Var)
    }

    pub const fn name(self) -> &'static str {
        match self {
            EntityTag::Var => "Var",
            EntityTag::Function => "Function",
            EntityTag::Void => "Void_Type",
            EntityTag::Atom => "Atom_Type",
            EntityTag::Struct => "Struct_Type",
            EntityTag::Enum => "Enum_Type",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Entity {
            name: name.into(),
            kind,
        }
    }

    pub fn var(name: impl Into<String>, ty: EntityId) -> Self {
        Self::new(name, EntityKind::Var(Var::new(ty)))
    }

    pub fn atom(name: impl Into<String>, desc: AtomDesc, size: u32) -> Self {
        Self::new(name, EntityKind::Atom(Atom { desc, size }))
    }

    pub fn void(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Void)
    }

    pub fn tag(&self) -> EntityTag {
        match self.kind {
            EntityKind::Var(_) => EntityTag::Var,
            EntityKind::Function(_) => EntityTag::Function,
            EntityKind::Void => EntityTag::Void,
            EntityKind::Atom(_) => EntityTag::Atom,
            EntityKind::Struct(_) => EntityTag::Struct,
            EntityKind::Enum(_) => EntityTag::Enum,
        }
    }

    #[inline]
    pub fn is_type_like(&self) -> bool {
        self.tag().is_type_like()
    }

    pub fn as_var(&self) -> Option<&Var> {
        match &self.kind {
            EntityKind::Var(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<Atom> {
        match self.kind {
            EntityKind::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            EntityKind::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Member frame of a struct or enum.
    pub fn record_frame(&self) -> Option<FrameId> {
        match self.kind {
            EntityKind::Struct(record) | EntityKind::Enum(record) => Some(record.frame),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
