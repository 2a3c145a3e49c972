//! Ripple-carry addition.

use std::ops::AddAssign;

use blockint_core::{add_with_carry, BITS_PER_BLOCK};

use crate::biguint::BigUint;

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        if self.is_trivial() && rhs.is_trivial() {
            if let Some(sum) = self.blocks[0].checked_add(rhs.blocks[0]) {
                self.blocks[0] = sum;
                return;
            }
        }

        let rhs_len = rhs.blocks.len();
        if self.blocks.len() < rhs_len {
            self.blocks.resize(rhs_len, 0);
        }

        let mut carry = false;
        for (dst, &src) in self.blocks.iter_mut().zip(rhs.blocks.iter()) {
            (*dst, carry) = add_with_carry(*dst, src, carry);
        }
        self.propagate_carry(rhs_len, carry);
    }
}

impl BigUint {
    /// `self += other << shift` without materializing the shifted operand.
    ///
    /// The shift splits into whole blocks, which offset the destination
    /// index, and leftover bits, which are merged across adjacent source
    /// blocks on the fly. A shifted operand of `n` blocks covers `n`
    /// destination blocks, plus one spill block when the bit shift is
    /// nonzero.
    pub(crate) fn add_shifted(&mut self, other: &BigUint, shift: u64) {
        if other.is_zero() {
            return;
        }

        let shift_blocks = (shift / u64::from(BITS_PER_BLOCK)) as usize;
        let shift_bits = (shift % u64::from(BITS_PER_BLOCK)) as u32;
        let src = &other.blocks;
        let span = src.len() + usize::from(shift_bits != 0);

        if self.blocks.len() < shift_blocks + span {
            self.blocks.resize(shift_blocks + span, 0);
        }

        let mut carry = false;
        for i in 0..span {
            let low = src.get(i).map_or(0, |&b| b << shift_bits);
            let high = if shift_bits != 0 && i > 0 {
                src[i - 1] >> (BITS_PER_BLOCK - shift_bits)
            } else {
                0
            };
            let dst = &mut self.blocks[shift_blocks + i];
            (*dst, carry) = add_with_carry(*dst, low | high, carry);
        }
        self.propagate_carry(shift_blocks + span, carry);
        // The spill block may have stayed zero.
        self.normalize();
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        self.propagate_carry(0, true);
    }

    /// Ripple a carry upward starting at block `from`, growing by one
    /// block if it runs off the top.
    fn propagate_carry(&mut self, from: usize, mut carry: bool) {
        let mut i = from;
        while carry {
            match self.blocks.get_mut(i) {
                Some(block) => {
                    (*block, carry) = block.overflowing_add(1);
                    i += 1;
                }
                None => {
                    self.blocks.push(1);
                    carry = false;
                }
            }
        }
    }
}
