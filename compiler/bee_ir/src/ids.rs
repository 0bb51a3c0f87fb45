//! Typed handles into the [`Ast`](crate::Ast) arenas.
//!
//! Each handle is a `u32` newtype so the three index spaces cannot be mixed up.

use std::fmt;

use crate::arena::ArenaId;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            #[inline]
            fn from_raw(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);

define_id!(
    /// Index into the entity arena.
    EntityId
);

define_id!(
    /// Index into the frame arena.
    FrameId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_the_handle_kind() {
        assert_eq!(format!("{:?}", ExprId::new(3)), "ExprId(3)");
        assert_eq!(format!("{:?}", EntityId::new(0)), "EntityId(0)");
        assert_eq!(format!("{:?}", FrameId::new(12)), "FrameId(12)");
    }

    #[test]
    fn raw_and_index_agree() {
        let id = FrameId::new(41);
        assert_eq!(id.raw(), 41);
        assert_eq!(id.index(), 41);
        assert_eq!(<FrameId as ArenaId>::from_raw(41), id);
    }
}
