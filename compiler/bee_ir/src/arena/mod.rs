//! Append-only storage returning index handles.
//!
//! Two flavours:
//!
//! - [`Arena`] has a fixed capacity `N` and reports [`ArenaError::CapacityExceeded`]
//!   instead of growing. The frame stack uses it to bound nesting depth.
//! - [`DynArena`] grows by whole chunks of `N` elements. A chunk is never
//!   reallocated once created, so element addresses stay stable while
//!   more elements are pushed.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A handle type that can address arena slots.
pub trait ArenaId: Copy + Eq {
    fn from_raw(raw: u32) -> Self;
    fn index(self) -> usize;
}

impl ArenaId for usize {
    #[inline]
    fn from_raw(raw: u32) -> Self {
        raw as usize
    }

    #[inline]
    fn index(self) -> usize {
        self
    }
}

/// Errors from fixed-capacity arena operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("capacity exceeded (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("cannot pop from an empty arena")]
    Empty,
}

/// Convert a slot number into a handle, panicking if the `u32` index space is exhausted.
#[inline]
fn slot_id<I: ArenaId>(slot: usize) -> I {
    match u32::try_from(slot) {
        Ok(raw) => I::from_raw(raw),
        Err(_) => panic!("arena index {slot} exceeds u32::MAX"),
    }
}

/// Fixed-capacity arena.
pub struct Arena<T, const N: usize, I: ArenaId = usize> {
    items: Vec<T>,
    _id: PhantomData<fn() -> I>,
}

impl<T, const N: usize, I: ArenaId> Arena<T, N, I> {
    pub fn new() -> Self {
        Arena {
            items: Vec::with_capacity(N),
            _id: PhantomData,
        }
    }

    /// Build an arena from an iterator, failing if it yields more than `N` items.
    pub fn try_from_iter(iter: impl IntoIterator<Item = T>) -> Result<Self, ArenaError> {
        let mut arena = Self::new();
        for item in iter {
            arena.push(item)?;
        }
        Ok(arena)
    }

    pub fn push(&mut self, value: T) -> Result<I, ArenaError> {
        if self.items.len() >= N {
            return Err(ArenaError::CapacityExceeded { capacity: N });
        }
        let id = slot_id(self.items.len());
        self.items.push(value);
        Ok(id)
    }

    pub fn pop(&mut self) -> Result<T, ArenaError> {
        self.items.pop().ok_or(ArenaError::Empty)
    }

    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.index())
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, const N: usize, I: ArenaId> Default for Arena<T, N, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, I: ArenaId> Index<I> for Arena<T, N, I> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.index()]
    }
}

impl<T, const N: usize, I: ArenaId> IndexMut<I> for Arena<T, N, I> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.index()]
    }
}

impl<T: fmt::Debug, const N: usize, I: ArenaId> fmt::Debug for Arena<T, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Chunked arena with stable element addresses.
pub struct DynArena<T, const N: usize, I: ArenaId = usize> {
    chunks: Vec<Vec<T>>,
    len: usize,
    _id: PhantomData<fn() -> I>,
}

impl<T, const N: usize, I: ArenaId> DynArena<T, N, I> {
    const NONZERO_CHUNK: () = assert!(N > 0, "DynArena chunk size must be non-zero");

    pub fn new() -> Self {
        let () = Self::NONZERO_CHUNK;
        DynArena {
            chunks: Vec::new(),
            len: 0,
            _id: PhantomData,
        }
    }

    pub fn push(&mut self, value: T) -> I {
        let id = slot_id(self.len);
        match self.chunks.last_mut() {
            Some(chunk) if chunk.len() < N => chunk.push(value),
            _ => {
                let mut chunk = Vec::with_capacity(N);
                chunk.push(value);
                self.chunks.push(chunk);
            }
        }
        self.len += 1;
        id
    }

    #[inline]
    pub fn get(&self, id: I) -> Option<&T> {
        let slot = id.index();
        self.chunks.get(slot / N)?.get(slot % N)
    }

    pub fn front(&self) -> Option<&T> {
        self.chunks.first()?.first()
    }

    pub fn back(&self) -> Option<&T> {
        self.chunks.last()?.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks allocated so far.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.chunks.iter().flatten()
    }

    /// Iterate elements together with their handles, in insertion order.
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.iter()
            .enumerate()
            .map(|(slot, value)| (slot_id(slot), value))
    }
}

impl<T, const N: usize, I: ArenaId> Default for DynArena<T, N, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize, I: ArenaId> Index<I> for DynArena<T, N, I> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        let slot = id.index();
        &self.chunks[slot / N][slot % N]
    }
}

impl<T, const N: usize, I: ArenaId> IndexMut<I> for DynArena<T, N, I> {
    fn index_mut(&mut self, id: I) -> &mut T {
        let slot = id.index();
        &mut self.chunks[slot / N][slot % N]
    }
}

impl<T: fmt::Debug, const N: usize, I: ArenaId> fmt::Debug for DynArena<T, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
