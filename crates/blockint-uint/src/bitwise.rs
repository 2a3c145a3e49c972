//! Block-wise AND and OR.

use std::ops::{BitAndAssign, BitOrAssign};

use crate::biguint::BigUint;

impl BitAndAssign<&BigUint> for BigUint {
    /// Blocks past the shorter operand are zero in the result, so the
    /// receiver truncates to the shorter length before normalizing.
    fn bitand_assign(&mut self, rhs: &BigUint) {
        self.blocks.truncate(rhs.blocks.len());
        for (dst, &src) in self.blocks.iter_mut().zip(rhs.blocks.iter()) {
            *dst &= src;
        }
        self.normalize();
    }
}

impl BitOrAssign<&BigUint> for BigUint {
    fn bitor_assign(&mut self, rhs: &BigUint) {
        if self.blocks.len() < rhs.blocks.len() {
            self.blocks.resize(rhs.blocks.len(), 0);
        }
        for (dst, &src) in self.blocks.iter_mut().zip(rhs.blocks.iter()) {
            *dst |= src;
        }
    }
}
