//! The [`BigUint`] value type: storage, construction and normalization.

use blockint_arena::BlockBuf;
use blockint_core::{ArithError, Block, BITS_PER_BLOCK};
use smallvec::smallvec;

/// Arbitrary-precision unsigned integer.
///
/// The magnitude is a little-block-endian sequence of [`Block`]s that is
/// never empty and never carries a most-significant zero block, except
/// for the zero value itself which is the single block `[0]`. Every
/// routine relies on this: block count orders magnitudes, and equality is
/// plain element-wise comparison.
///
/// Values own their blocks exclusively; cloning deep-copies them. Up to
/// [`INLINE_BLOCKS`](blockint_arena::INLINE_BLOCKS) blocks live inline in
/// the value without touching the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigUint {
    pub(crate) blocks: BlockBuf,
}

impl BigUint {
    /// The zero value.
    pub fn zero() -> Self {
        Self::from_block(0)
    }

    /// The value one.
    pub fn one() -> Self {
        Self::from_block(1)
    }

    /// A single-block value.
    pub fn from_block(value: Block) -> Self {
        Self {
            blocks: smallvec![value],
        }
    }

    /// Build a value from little-block-endian blocks.
    ///
    /// Most-significant zero blocks are dropped; an empty slice is zero.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut value = Self {
            blocks: BlockBuf::from_slice(blocks),
        };
        if value.blocks.is_empty() {
            value.blocks.push(0);
        }
        value.normalize();
        value
    }

    /// A zero-filled value of exactly `len` blocks (at least one).
    ///
    /// The result is NOT normalized until its top block is written or
    /// [`normalize`](Self::normalize) runs.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            blocks: smallvec![0; len.max(1)],
        }
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.is_trivial() && self.blocks[0] == 0
    }

    /// Whether the value fits in one block, so native word arithmetic applies.
    pub fn is_trivial(&self) -> bool {
        self.blocks.len() == 1
    }

    /// Number of blocks in the normalized representation.
    pub fn block_len(&self) -> usize {
        self.blocks.len()
    }

    /// Read-only view of the blocks, least significant first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Whether the blocks are stored inline rather than on the heap.
    pub fn is_inline(&self) -> bool {
        !self.blocks.spilled()
    }

    /// Narrow to a native word.
    ///
    /// Fails with [`ArithError::Overflow`] unless the value is trivial.
    pub fn to_u64(&self) -> Result<u64, ArithError> {
        if self.is_trivial() {
            Ok(self.blocks[0])
        } else {
            Err(ArithError::Overflow {
                blocks: self.blocks.len(),
            })
        }
    }

    /// Narrow to a native double word.
    ///
    /// Fails with [`ArithError::Overflow`] above two blocks.
    pub fn to_u128(&self) -> Result<u128, ArithError> {
        match *self.blocks.as_slice() {
            [lo] => Ok(u128::from(lo)),
            [lo, hi] => Ok((u128::from(hi) << BITS_PER_BLOCK) | u128::from(lo)),
            _ => Err(ArithError::Overflow {
                blocks: self.blocks.len(),
            }),
        }
    }

    /// Drop most-significant zero blocks, always keeping at least one.
    pub(crate) fn normalize(&mut self) {
        while self.blocks.len() > 1 && self.blocks.last() == Some(&0) {
            self.blocks.pop();
        }
    }

    pub(crate) fn is_normalized(&self) -> bool {
        match self.blocks.as_slice() {
            [] => false,
            [_] => true,
            [.., top] => *top != 0,
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.blocks.clear();
        self.blocks.push(0);
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BigUint {
    fn from(v: u64) -> Self {
        Self::from_block(v)
    }
}

impl From<u32> for BigUint {
    fn from(v: u32) -> Self {
        Self::from_block(Block::from(v))
    }
}

impl From<u128> for BigUint {
    fn from(v: u128) -> Self {
        Self::from_blocks(&[v as Block, (v >> BITS_PER_BLOCK) as Block])
    }
}

impl TryFrom<&BigUint> for u64 {
    type Error = ArithError;

    fn try_from(v: &BigUint) -> Result<Self, Self::Error> {
        v.to_u64()
    }
}

impl TryFrom<BigUint> for u64 {
    type Error = ArithError;

    fn try_from(v: BigUint) -> Result<Self, Self::Error> {
        v.to_u64()
    }
}

impl TryFrom<&BigUint> for u128 {
    type Error = ArithError;

    fn try_from(v: &BigUint) -> Result<Self, Self::Error> {
        v.to_u128()
    }
}
