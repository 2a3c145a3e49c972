//! Core types for the blockint workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental pieces shared by the arena and the integer engine:
//! the [`Block`] word and its carry/borrow primitives, error types, and
//! arena identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod id;

pub use block::{add_with_carry, sub_with_borrow, Block, BITS_PER_BLOCK, BLOCK_MAX};
pub use error::{ArithError, ParseError, ReadError};
pub use id::ArenaId;
