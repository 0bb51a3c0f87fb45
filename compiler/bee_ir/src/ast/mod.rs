//! The owner of every arena and the frame stack.

use std::fmt;

use tracing::debug;

use crate::arena::{Arena, ArenaError, DynArena};
use crate::{Entity, EntityId, Expr, ExprId, Frame, FrameId};

/// Scope openings allowed below the root frame.
pub const FRAME_DEPTH_LIMIT: u32 = 256;

const FRAME_STACK_CAPACITY: usize = FRAME_DEPTH_LIMIT as usize + 1;

const EXPR_CHUNK: usize = 1024;
const ENTITY_CHUNK: usize = 256;
const FRAME_CHUNK: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    #[error("frame depth limit exceeded (limit: {limit})")]
    FrameDepth { limit: u32 },
    #[error("cannot pop the main frame")]
    PopMain,
    #[error("frame {frame} is not a child of the current frame")]
    NotChild { frame: u32 },
    #[error(transparent)]
    Arena(#[from] ArenaError),
}

/// Expressions, entities and frames of one source unit.
///
/// Frames popped off the stack stay in the frame arena so scope expressions
/// can be re-entered later; they are only detached from name lookup.
pub struct Ast {
    exprs: DynArena<Expr, EXPR_CHUNK, ExprId>,
    entities: DynArena<Entity, ENTITY_CHUNK, EntityId>,
    frames: DynArena<Frame, FRAME_CHUNK, FrameId>,
    stack: Arena<FrameId, FRAME_STACK_CAPACITY>,
    main_frame: FrameId,
    main_scope: Option<ExprId>,
}

impl Ast {
    pub fn new() -> Self {
        let mut frames = DynArena::new();
        let main_frame = frames.push(Frame::new(None, 0));
        let mut stack = Arena::new();
        // An empty stack always has room for the root.
        let _ = stack.push(main_frame);
        Ast {
            exprs: DynArena::new(),
            entities: DynArena::new(),
            frames,
            stack,
            main_frame,
            main_scope: None,
        }
    }

    #[inline]
    pub fn main_frame(&self) -> FrameId {
        self.main_frame
    }

    #[inline]
    pub fn main_scope(&self) -> Option<ExprId> {
        self.main_scope
    }

    pub fn set_main_scope(&mut self, scope: ExprId) {
        self.main_scope = Some(scope);
    }

    // Expressions

    pub fn push_expr(&mut self, expr: Expr) -> ExprId {
        self.exprs.push(expr)
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id]
    }

    #[inline]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // Entities

    /// Store an entity without binding it to any name.
    pub fn push_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity)
    }

    /// Store an entity and bind it under its own name in the current frame.
    pub fn install(&mut self, entity: Entity) -> EntityId {
        let name = entity.name.clone();
        let id = self.entities.push(entity);
        self.bind(name, id);
        id
    }

    #[inline]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id]
    }

    #[inline]
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id]
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter_enumerated()
    }

    // Frames

    #[inline]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id]
    }

    #[inline]
    pub fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id]
    }

    pub fn frames(&self) -> impl Iterator<Item = (FrameId, &Frame)> + '_ {
        self.frames.iter_enumerated()
    }

    /// The innermost frame on the stack.
    pub fn current_frame(&self) -> FrameId {
        self.stack.back().copied().unwrap_or(self.main_frame)
    }

    /// Depth of the current frame; the main frame is 0.
    pub fn depth(&self) -> u32 {
        self.frame(self.current_frame()).depth()
    }

    /// Open a new child of the current frame and make it current.
    pub fn stack_push(&mut self) -> Result<FrameId, AstError> {
        let parent = self.current_frame();
        let depth = self.frame(parent).depth() + 1;
        if depth > FRAME_DEPTH_LIMIT {
            return Err(AstError::FrameDepth {
                limit: FRAME_DEPTH_LIMIT,
            });
        }
        let frame = self.frames.push(Frame::new(Some(parent), depth));
        self.stack.push(frame)?;
        debug!(?frame, ?parent, depth, "push frame");
        Ok(frame)
    }

    /// Make an existing child of the current frame current again.
    pub fn stack_enter(&mut self, frame: FrameId) -> Result<(), AstError> {
        if self.frame(frame).parent() != Some(self.current_frame()) {
            return Err(AstError::NotChild { frame: frame.raw() });
        }
        self.stack.push(frame)?;
        debug!(?frame, "enter frame");
        Ok(())
    }

    /// Leave the current frame. The main frame cannot be popped.
    pub fn stack_pop(&mut self) -> Result<FrameId, AstError> {
        if self.stack.len() <= 1 {
            return Err(AstError::PopMain);
        }
        let frame = self.stack.pop()?;
        debug!(?frame, "pop frame");
        Ok(frame)
    }

    // Name resolution

    pub fn bind(&mut self, name: impl Into<String>, entity: EntityId) {
        let frame = self.current_frame();
        self.frames[frame].push(name, entity);
    }

    /// Resolve `name` from the current frame outwards.
    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.find_from(self.current_frame(), name)
    }

    /// Resolve `name` starting at `frame` and walking its parents.
    pub fn find_from(&self, frame: FrameId, name: &str) -> Option<EntityId> {
        let mut cursor = Some(frame);
        while let Some(id) = cursor {
            let frame = self.frame(id);
            if let Some(entity) = frame.find_local(name) {
                return Some(entity);
            }
            cursor = frame.parent();
        }
        None
    }

    /// Resolve `name` in the current frame only.
    pub fn find_local(&self, name: &str) -> Option<EntityId> {
        self.frame(self.current_frame()).find_local(name)
    }

    /// Body of `function`, searched from the current frame outwards.
    pub fn find_function(&self, function: EntityId) -> Option<ExprId> {
        let mut cursor = Some(self.current_frame());
        while let Some(id) = cursor {
            let frame = self.frame(id);
            if let Some(body) = frame.find_function_local(function) {
                return Some(body);
            }
            cursor = frame.parent();
        }
        None
    }

    /// Backend slot of `entity`, searched from `frame` outwards.
    pub fn find_ref(&self, frame: FrameId, entity: EntityId) -> Option<u32> {
        let mut cursor = Some(frame);
        while let Some(id) = cursor {
            let frame = self.frame(id);
            if let Some(slot) = frame.find_ref_local(entity) {
                return Some(slot);
            }
            cursor = frame.parent();
        }
        None
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ast")
            .field("exprs", &self.exprs.len())
            .field("entities", &self.entities.len())
            .field("frames", &self.frames.len())
            .field("current_frame", &self.current_frame())
            .field("main_scope", &self.main_scope)
            .finish()
    }
}
