//! blockint: block-based arbitrary-precision unsigned integers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all blockint sub-crates. For most users, adding `blockint` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blockint::prelude::*;
//!
//! let a = BigUint::from(1_000_000_000_000u64);
//! let b: BigUint = "1000000000000".parse().unwrap();
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "1000000000000000000000000");
//!
//! let (q, r) = product.div_mod(&BigUint::from(7u64)).unwrap();
//! assert_eq!(&q * &BigUint::from(7u64) + r, product);
//!
//! assert_eq!(
//!     BigUint::one().checked_sub(&BigUint::from(2u64)),
//!     None,
//! );
//! assert_eq!(
//!     product.div_mod(&BigUint::zero()),
//!     Err(ArithError::DivisionByZero),
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blockint-core` | Block word type, carry primitives, error enums, IDs |
//! | [`arena`] | `blockint-arena` | Bump arena, allocations, inline block storage |
//! | [`uint`] | `blockint-uint` | The `BigUint` value type and its operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block word type, carry/borrow primitives and error types (`blockint-core`).
pub use blockint_core as types;

/// Bump arena with heap fallback and inline block storage (`blockint-arena`).
///
/// [`arena::Arena`] hands out byte allocations from a fixed buffer;
/// [`arena::BlockBuf`] is the inline-first storage behind every value.
pub use blockint_arena as arena;

/// Arbitrary-precision unsigned integers (`blockint-uint`).
pub use blockint_uint as uint;

/// Common imports for typical blockint usage.
///
/// ```rust
/// use blockint::prelude::*;
/// ```
pub mod prelude {
    // Value type
    pub use blockint_uint::BigUint;

    // Words
    pub use blockint_core::{Block, BITS_PER_BLOCK};

    // Errors
    pub use blockint_core::{ArithError, ParseError, ReadError};
    pub use blockint_arena::ArenaError;

    // Arena
    pub use blockint_arena::{Allocation, Arena, ArenaConfig};
}
