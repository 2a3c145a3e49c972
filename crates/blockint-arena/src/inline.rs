//! Inline block storage.
//!
//! [`BlockBuf`] keeps up to [`INLINE_BLOCKS`] blocks inside the owning
//! value and spills to the heap transparently beyond that, so the common
//! small-magnitude case never touches the allocator.

use blockint_core::Block;
use smallvec::SmallVec;

/// Number of blocks stored inline before spilling to the heap.
pub const INLINE_BLOCKS: usize = 2;

/// Growable block sequence with inline storage for small values.
pub type BlockBuf = SmallVec<[Block; INLINE_BLOCKS]>;
