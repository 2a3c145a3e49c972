//! Fixed-capacity bump arena with heap fallback.
//!
//! An [`Arena`] owns a zero-initialised byte buffer and a cursor. Requests
//! are rounded up to the configured alignment and carved off the front of
//! the free region while it has room; once exhausted, requests are served
//! from the general heap instead. Freeing is LIFO: only the most recent
//! stacked allocation rewinds the cursor, anything else is a no-op until
//! [`Arena::reset`].
//!
//! Single owner, no interior mutability, not shared across threads.

use blockint_core::ArenaId;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{Allocation, ArenaHandle};

/// Bump allocator over a fixed byte buffer.
pub struct Arena {
    id: ArenaId,
    config: ArenaConfig,
    /// Backing storage. Allocated to full capacity at creation.
    data: Box<[u8]>,
    /// Bump pointer: next free byte offset.
    cursor: usize,
}

impl Arena {
    /// Create an arena from a validated config.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            id: ArenaId::next(),
            data: vec![0u8; config.capacity].into_boxed_slice(),
            config,
            cursor: 0,
        })
    }

    /// Create an arena of `capacity` bytes with the default alignment.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Allocate at least `n` bytes.
    ///
    /// The size is rounded up to the arena's alignment. The bytes come
    /// from the internal buffer if the remaining capacity suffices, else
    /// from the heap. Either way they are zeroed.
    pub fn allocate(&mut self, n: usize) -> Result<Allocation, ArenaError> {
        let len = self
            .config
            .align_up(n)
            .ok_or(ArenaError::SizeOverflow { requested: n })?;

        if len <= self.remaining() {
            let offset = self.cursor;
            self.cursor += len;
            self.data[offset..self.cursor].fill(0);
            return Ok(Allocation::Stacked {
                arena: self.id,
                offset,
                len,
            });
        }

        tracing::trace!(
            arena = %self.id,
            requested = len,
            remaining = self.remaining(),
            "arena exhausted, spilling to heap"
        );
        Ok(Allocation::Heap(vec![0u8; len].into_boxed_slice()))
    }

    /// Allocate room for `count` values of type `T`.
    pub fn allocate_array<T>(&mut self, count: usize) -> Result<Allocation, ArenaError> {
        let bytes = count
            .checked_mul(std::mem::size_of::<T>())
            .ok_or(ArenaError::SizeOverflow {
                requested: usize::MAX,
            })?;
        self.allocate(bytes)
    }

    /// Release an allocation.
    ///
    /// Returns `true` if the cursor was rewound, which happens only when
    /// `alloc` is the most recent stacked allocation of this arena. Heap
    /// allocations are dropped; other stacked allocations are ignored.
    pub fn deallocate(&mut self, alloc: Allocation) -> bool {
        match alloc {
            Allocation::Stacked { arena, offset, len } if arena == self.id => {
                if offset + len == self.cursor {
                    self.cursor = offset;
                    true
                } else {
                    tracing::trace!(
                        arena = %self.id,
                        offset,
                        len,
                        cursor = self.cursor,
                        "out-of-order release, cursor kept"
                    );
                    false
                }
            }
            Allocation::Stacked { .. } | Allocation::Heap(_) => false,
        }
    }

    /// Whether `alloc` lives inside this arena's buffer.
    pub fn owns(&self, alloc: &Allocation) -> bool {
        matches!(alloc, Allocation::Stacked { arena, .. } if *arena == self.id)
    }

    /// Read the bytes of an allocation.
    ///
    /// Returns `None` for a stacked allocation of a different arena.
    pub fn get<'a>(&'a self, alloc: &'a Allocation) -> Option<&'a [u8]> {
        match alloc {
            Allocation::Stacked { arena, offset, len } if *arena == self.id => {
                self.data.get(*offset..*offset + *len)
            }
            Allocation::Stacked { .. } => None,
            Allocation::Heap(bytes) => Some(&bytes[..]),
        }
    }

    /// Mutably access the bytes of an allocation.
    ///
    /// Returns `None` for a stacked allocation of a different arena.
    pub fn get_mut<'a>(&'a mut self, alloc: &'a mut Allocation) -> Option<&'a mut [u8]> {
        match alloc {
            Allocation::Stacked { arena, offset, len } if *arena == self.id => {
                self.data.get_mut(*offset..*offset + *len)
            }
            Allocation::Stacked { .. } => None,
            Allocation::Heap(bytes) => Some(&mut bytes[..]),
        }
    }

    /// Reset the cursor to the start of the buffer.
    ///
    /// All outstanding stacked allocations become invalid. The buffer is
    /// re-zeroed lazily by the next [`allocate`](Self::allocate).
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Comparable identity of this arena.
    pub fn handle(&self) -> ArenaHandle {
        ArenaHandle {
            arena: self.id,
            capacity: self.config.capacity,
        }
    }

    /// Unique ID of this arena.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Bytes currently carved from the buffer.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total size of the buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes still available in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// The arena's configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}
