//! Allocation records and allocator handles.
//!
//! An [`Allocation`] says where a block of bytes lives: carved out of an
//! arena's fixed buffer, or spilled to the heap. An [`ArenaHandle`] is the
//! comparable identity of an arena, used to decide whether two holders
//! share the same storage.

use std::fmt;

use blockint_core::ArenaId;

/// A block of bytes handed out by [`Arena::allocate`](crate::Arena::allocate).
///
/// Stacked allocations are resolved through the arena that produced them;
/// heap allocations own their bytes and free them on drop.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Allocation {
    /// A prefix carved from an arena's internal buffer.
    Stacked {
        /// The arena that owns the bytes.
        arena: ArenaId,
        /// Byte offset into the arena's buffer.
        offset: usize,
        /// Length in bytes, already rounded to the arena's alignment.
        len: usize,
    },
    /// Fallback storage from the general-purpose heap.
    Heap(Box<[u8]>),
}

impl Allocation {
    /// Length of the allocation in bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Stacked { len, .. } => *len,
            Self::Heap(bytes) => bytes.len(),
        }
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the bytes live inside an arena buffer.
    pub fn is_stacked(&self) -> bool {
        matches!(self, Self::Stacked { .. })
    }
}

/// Comparable identity of an arena.
///
/// Two handles are equal iff they refer to the same arena instance with
/// the same fixed capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArenaHandle {
    pub(crate) arena: ArenaId,
    pub(crate) capacity: usize,
}

impl ArenaHandle {
    /// The arena this handle refers to.
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// Fixed capacity of the arena's buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for ArenaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaHandle(id={}, cap={})", self.arena, self.capacity)
    }
}
