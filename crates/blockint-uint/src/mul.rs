//! Shift-and-add long multiplication.

use std::ops::MulAssign;

use blockint_core::BITS_PER_BLOCK;

use crate::biguint::BigUint;

impl MulAssign<&BigUint> for BigUint {
    /// For every set bit `k` of `rhs`, accumulate `self << k`. Schoolbook
    /// cost, no temporaries beyond the accumulator.
    fn mul_assign(&mut self, rhs: &BigUint) {
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return;
        }
        if self.is_trivial() && rhs.is_trivial() {
            if let Some(product) = self.blocks[0].checked_mul(rhs.blocks[0]) {
                self.blocks[0] = product;
                return;
            }
        }

        let mut acc = BigUint::zero();
        for (index, &block) in rhs.blocks.iter().enumerate() {
            let base = index as u64 * u64::from(BITS_PER_BLOCK);
            let mut bits = block;
            while bits != 0 {
                let bit = u64::from(bits.trailing_zeros());
                acc.add_shifted(self, base + bit);
                bits &= bits - 1;
            }
        }
        *self = acc;
    }
}
