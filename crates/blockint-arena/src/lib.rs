//! Arena allocation and inline block storage for blockint.
//!
//! Two layers live here:
//!
//! ```text
//! Arena (fixed-capacity byte buffer + bump cursor)
//! ├── allocate(n)   → Allocation::Stacked while the buffer has room
//! │                 → Allocation::Heap once it is exhausted
//! └── deallocate()  → rewinds the cursor only for the most recent
//!                     stacked allocation (LIFO), frees heap spills
//!
//! BlockBuf (SmallVec<[Block; INLINE_BLOCKS]>)
//! └── per-value digit storage: inline for small magnitudes,
//!     spills to the heap transparently as the value grows
//! ```
//!
//! Every `BigUint` owns one [`BlockBuf`]; the inline part plays the role
//! of a per-instance arena and cannot outlive its value. [`Arena`] is the
//! general form of the same pattern for callers that manage raw byte
//! scratch space themselves.
//!
//! The crate contains no `unsafe`: stacked allocations are offsets into
//! the arena's buffer, resolved through [`Arena::get`] and
//! [`Arena::get_mut`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod handle;
pub mod inline;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::{Allocation, ArenaHandle};
pub use inline::{BlockBuf, INLINE_BLOCKS};
