//! Arena configuration parameters.

use blockint_core::Block;

use crate::error::ArenaError;
use crate::inline::INLINE_BLOCKS;

/// Configuration for an [`Arena`](crate::Arena).
///
/// Validated at construction; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the fixed internal buffer in bytes.
    ///
    /// Default: [`ArenaConfig::DEFAULT_CAPACITY`]. Must be a multiple of
    /// `align`.
    pub capacity: usize,

    /// Every request is rounded up to a multiple of this many bytes.
    ///
    /// Default: the alignment of [`Block`]. Must be a power of two.
    pub align: usize,
}

impl ArenaConfig {
    /// Default capacity: room for one inline block buffer.
    pub const DEFAULT_CAPACITY: usize = INLINE_BLOCKS * std::mem::size_of::<Block>();

    /// Default rounding granule.
    pub const DEFAULT_ALIGN: usize = std::mem::align_of::<Block>();

    /// Create a config with the given capacity and the default alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            align: Self::DEFAULT_ALIGN,
        }
    }

    /// Create a config sized to hold exactly `blocks` blocks.
    pub fn for_blocks(blocks: usize) -> Self {
        Self::new(blocks.saturating_mul(std::mem::size_of::<Block>()))
    }

    /// Check the alignment and capacity constraints.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !self.align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment { align: self.align });
        }
        if self.capacity % self.align != 0 {
            return Err(ArenaError::MisalignedCapacity {
                capacity: self.capacity,
                align: self.align,
            });
        }
        Ok(())
    }

    /// Round `n` up to the next multiple of `align`.
    ///
    /// Returns `None` if the rounded size does not fit in `usize`.
    pub fn align_up(&self, n: usize) -> Option<usize> {
        let mask = self.align.saturating_sub(1);
        n.checked_add(mask).map(|v| v & !mask)
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_inline_buffer() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, INLINE_BLOCKS * 8);
        assert_eq!(config.align, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn for_blocks_sizes_in_words() {
        assert_eq!(ArenaConfig::for_blocks(4).capacity, 32);
    }

    #[test]
    fn rejects_non_power_of_two_alignment() {
        let config = ArenaConfig {
            capacity: 24,
            align: 6,
        };
        assert_eq!(
            config.validate(),
            Err(ArenaError::InvalidAlignment { align: 6 })
        );
    }

    #[test]
    fn rejects_capacity_not_multiple_of_alignment() {
        let config = ArenaConfig {
            capacity: 20,
            align: 8,
        };
        assert_eq!(
            config.validate(),
            Err(ArenaError::MisalignedCapacity {
                capacity: 20,
                align: 8
            })
        );
    }

    #[test]
    fn align_up_rounds_to_granule() {
        let config = ArenaConfig::new(64);
        assert_eq!(config.align_up(0), Some(0));
        assert_eq!(config.align_up(1), Some(8));
        assert_eq!(config.align_up(8), Some(8));
        assert_eq!(config.align_up(9), Some(16));
        assert_eq!(config.align_up(usize::MAX), None);
    }
}
