//! Bit length, base-2 logarithm and the square-root estimate.

use blockint_core::BITS_PER_BLOCK;

use crate::biguint::BigUint;

impl BigUint {
    /// Floor of the base-2 logarithm, i.e. the index of the highest set
    /// bit. `None` for zero.
    pub fn log2(&self) -> Option<u64> {
        let top = *self.blocks.last()?;
        if top == 0 {
            return None;
        }
        let below = (self.blocks.len() as u64 - 1) * u64::from(BITS_PER_BLOCK);
        Some(below + u64::from(top.ilog2()))
    }

    /// Number of significant bits; zero for the zero value.
    pub fn bits(&self) -> u64 {
        self.log2().map_or(0, |l| l + 1)
    }

    /// Order-of-magnitude square root: `1 << (log2(self) / 2)`.
    ///
    /// This is NOT an integer square root. The result is a power of two
    /// within a factor of two of the true root. Zero maps to zero.
    pub fn sqrt(&self) -> BigUint {
        match self.log2() {
            None => BigUint::zero(),
            Some(l) => &BigUint::one() << (l / 2),
        }
    }
}
