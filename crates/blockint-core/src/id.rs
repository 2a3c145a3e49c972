//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaId`] allocation.
static ARENA_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an arena.
///
/// Allocated from a monotonic atomic counter via [`ArenaId::next`].
/// Two distinct arenas always have different IDs, even if they have the
/// same capacity, so allocator handles can tell "same storage" apart from
/// "same shape" without comparing addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh, unique arena ID. Thread-safe.
    pub fn next() -> Self {
        Self(ARENA_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
