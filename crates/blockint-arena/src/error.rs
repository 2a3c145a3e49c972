//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena construction or allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The configured alignment is not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        align: usize,
    },
    /// The configured capacity is not a multiple of the alignment.
    MisalignedCapacity {
        /// The rejected capacity in bytes.
        capacity: usize,
        /// The configured alignment.
        align: usize,
    },
    /// Rounding the request up to the alignment overflowed `usize`.
    SizeOverflow {
        /// Number of bytes requested.
        requested: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlignment { align } => {
                write!(f, "arena alignment {align} is not a power of two")
            }
            Self::MisalignedCapacity { capacity, align } => {
                write!(
                    f,
                    "arena capacity {capacity} bytes is not a multiple of alignment {align}"
                )
            }
            Self::SizeOverflow { requested } => {
                write!(f, "allocation of {requested} bytes overflows when aligned")
            }
        }
    }
}

impl Error for ArenaError {}
