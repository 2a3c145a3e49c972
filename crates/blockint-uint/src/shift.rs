//! Bit shifts crossing block boundaries.
//!
//! A shift of `s` bits splits into `s / 64` whole blocks, which move data
//! between indices, and `s % 64` leftover bits, which travel between
//! adjacent blocks.

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use blockint_core::BITS_PER_BLOCK;

use crate::biguint::BigUint;

const BITS: u64 = BITS_PER_BLOCK as u64;

/// Split a shift amount into whole blocks and leftover bits.
fn split(shift: u64) -> (u64, u32) {
    (shift / BITS, (shift % BITS) as u32)
}

impl BigUint {
    /// Whether a single-block value can shift left by `shift` without
    /// losing bits off the top of the block.
    fn fits_shifted(&self, shift: u64) -> bool {
        self.is_trivial() && shift < BITS && u64::from(self.blocks[0].leading_zeros()) >= shift
    }
}

impl ShlAssign<u64> for BigUint {
    fn shl_assign(&mut self, shift: u64) {
        if shift == 0 || self.is_zero() {
            return;
        }
        if self.fits_shifted(shift) {
            self.blocks[0] <<= shift;
            return;
        }

        let (shift_blocks, shift_bits) = split(shift);
        let shift_blocks = shift_blocks as usize;
        let start = self.blocks.len();

        let carry = if shift_bits != 0 {
            self.blocks[start - 1] >> (BITS_PER_BLOCK - shift_bits)
        } else {
            0
        };
        self.blocks
            .resize(start + shift_blocks + usize::from(carry != 0), 0);
        if carry != 0 {
            self.blocks[start + shift_blocks] = carry;
        }

        // Top down, so every source block is read before it is overwritten.
        for i in (0..start).rev() {
            let from_below = if shift_bits != 0 && i > 0 {
                self.blocks[i - 1] >> (BITS_PER_BLOCK - shift_bits)
            } else {
                0
            };
            self.blocks[i + shift_blocks] = (self.blocks[i] << shift_bits) | from_below;
        }
        self.blocks[..shift_blocks].fill(0);
    }
}

impl ShrAssign<u64> for BigUint {
    fn shr_assign(&mut self, shift: u64) {
        if shift == 0 || self.is_zero() {
            return;
        }

        let len = self.blocks.len();
        let (shift_blocks, shift_bits) = split(shift);
        if shift_blocks >= len as u64 {
            self.set_zero();
            return;
        }
        let shift_blocks = shift_blocks as usize;

        // Bottom up, so every source block is read before it is overwritten.
        for i in shift_blocks..len - 1 {
            let from_above = if shift_bits != 0 {
                self.blocks[i + 1] << (BITS_PER_BLOCK - shift_bits)
            } else {
                0
            };
            self.blocks[i - shift_blocks] = (self.blocks[i] >> shift_bits) | from_above;
        }
        self.blocks[len - 1 - shift_blocks] = self.blocks[len - 1] >> shift_bits;
        self.blocks.truncate(len - shift_blocks);
        // At most the top block can have emptied out.
        self.normalize();
    }
}

impl Shl<u64> for &BigUint {
    type Output = BigUint;

    /// Builds the shifted value directly instead of copying then shifting.
    fn shl(self, shift: u64) -> BigUint {
        if shift == 0 || self.is_zero() {
            return self.clone();
        }
        if self.fits_shifted(shift) {
            return BigUint::from_block(self.blocks[0] << shift);
        }

        let (shift_blocks, shift_bits) = split(shift);
        let shift_blocks = shift_blocks as usize;
        let mut out = BigUint::zeroed(self.blocks.len() + shift_blocks);

        let mut carry = 0;
        for (i, &block) in self.blocks.iter().enumerate() {
            out.blocks[i + shift_blocks] = (block << shift_bits) | carry;
            carry = if shift_bits != 0 {
                block >> (BITS_PER_BLOCK - shift_bits)
            } else {
                0
            };
        }
        if carry != 0 {
            out.blocks.push(carry);
        }
        out.normalize();
        out
    }
}

impl Shr<u64> for &BigUint {
    type Output = BigUint;

    fn shr(self, shift: u64) -> BigUint {
        let mut out = self.clone();
        out >>= shift;
        out
    }
}
