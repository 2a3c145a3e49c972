//! Block-based arbitrary-precision unsigned integers.
//!
//! [`BigUint`] stores its magnitude as a little-block-endian sequence of
//! 64-bit [`Block`]s (block 0 is least significant) in an inline
//! [`BlockBuf`](blockint_arena::BlockBuf), and is always normalized: no
//! most-significant zero block unless the value is the single-block zero.
//!
//! # Layout
//!
//! Every operator funnels into a handful of block-wise primitives:
//!
//! - `add`: ripple-carry addition and the shift-fused
//!   `self += other << shift` that drives multiplication.
//! - `sub`: ripple-borrow subtraction.
//! - `shift`: shifts crossing block boundaries.
//! - `div`: bit-by-bit restoring division.
//!
//! Single-block ("trivial") operands take native machine-word fast paths
//! throughout. Algorithms are schoolbook-grade by intent.
//!
//! # Errors
//!
//! Fallible operations return [`ArithError`] or [`ParseError`]. The
//! `std::ops` impls for `-`, `/` and `%` panic on the same conditions,
//! matching the primitive integer types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod add;
pub mod biguint;
mod bitwise;
mod cmp;
mod convert;
mod div;
mod hash;
mod io;
mod log;
mod mul;
mod ops;
mod shift;
mod sub;

pub use biguint::BigUint;
pub use blockint_core::{ArithError, Block, ParseError, ReadError, BITS_PER_BLOCK};
