//! Lexical scopes.
//!
//! A frame maps names to entities and links to its parent. Recursive lookup
//! across the parent chain lives on [`Ast`](crate::Ast), which owns all frames.

use rustc_hash::FxHashMap;

use crate::{EntityId, ExprId, FrameId};

#[derive(Clone, Debug, Default)]
pub struct Frame {
    defs: FxHashMap<String, EntityId>,
    /// Bindings in insertion order, aliases included.
    order: Vec<(String, EntityId)>,
    /// Backend slot assigned to an entity.
    refs: FxHashMap<EntityId, u32>,
    /// Function entity to its body scope.
    binds: FxHashMap<EntityId, ExprId>,
    parent: Option<FrameId>,
    depth: u32,
}

impl Frame {
    pub fn new(parent: Option<FrameId>, depth: u32) -> Self {
        Frame {
            parent,
            depth,
            ..Frame::default()
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<FrameId> {
        self.parent
    }

    /// Nesting depth; the root frame is 0.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn find_local(&self, name: &str) -> Option<EntityId> {
        self.defs.get(name).copied()
    }

    /// Bind `name` to `entity`, replacing any previous local binding.
    ///
    /// Rejecting redefinitions is the caller's job.
    pub fn push(&mut self, name: impl Into<String>, entity: EntityId) {
        let name = name.into();
        if let Some(slot) = self.order.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = entity;
        } else {
            self.order.push((name.clone(), entity));
        }
        self.defs.insert(name, entity);
    }

    /// Bindings in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, EntityId)> + '_ {
        self.order.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Distinct entities in definition order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        let mut seen = Vec::with_capacity(self.order.len());
        self.order.iter().filter_map(move |(_, id)| {
            if seen.contains(id) {
                None
            } else {
                seen.push(*id);
                Some(*id)
            }
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn push_ref(&mut self, entity: EntityId, slot: u32) {
        self.refs.insert(entity, slot);
    }

    pub fn find_ref_local(&self, entity: EntityId) -> Option<u32> {
        self.refs.get(&entity).copied()
    }

    /// Record the body of `function`. Returns the existing body if already bound.
    pub fn bind_function(&mut self, function: EntityId, body: ExprId) -> Result<(), ExprId> {
        match self.binds.get(&function) {
            Some(existing) => Err(*existing),
            None => {
                self.binds.insert(function, body);
                Ok(())
            }
        }
    }

    pub fn find_function_local(&self, function: EntityId) -> Option<ExprId> {
        self.binds.get(&function).copied()
    }
}
