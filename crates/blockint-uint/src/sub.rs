//! Ripple-borrow subtraction.

use blockint_core::{sub_with_borrow, ArithError};

use crate::biguint::BigUint;

impl BigUint {
    /// Subtract `rhs` in place.
    ///
    /// Fails with [`ArithError::Underflow`] if `rhs > self`; the receiver
    /// is left unchanged in that case.
    pub fn try_sub_assign(&mut self, rhs: &BigUint) -> Result<(), ArithError> {
        if self.is_trivial() && rhs.is_trivial() {
            let (lhs, rhs) = (self.blocks[0], rhs.blocks[0]);
            if lhs < rhs {
                return Err(ArithError::Underflow);
            }
            self.blocks[0] = lhs - rhs;
            return Ok(());
        }

        if self.blocks.len() < rhs.blocks.len() || *self < *rhs {
            return Err(ArithError::Underflow);
        }
        self.sub_unchecked(rhs);
        Ok(())
    }

    /// `self - rhs`, or `None` if the result would be negative.
    pub fn checked_sub(&self, rhs: &BigUint) -> Option<BigUint> {
        let mut out = self.clone();
        out.try_sub_assign(rhs).ok().map(|()| out)
    }

    /// Subtract one in place; fails with [`ArithError::Underflow`] at zero.
    pub fn try_decrement(&mut self) -> Result<(), ArithError> {
        if self.is_zero() {
            return Err(ArithError::Underflow);
        }
        for block in self.blocks.iter_mut() {
            let (diff, borrow) = block.overflowing_sub(1);
            *block = diff;
            if !borrow {
                break;
            }
        }
        self.normalize();
        Ok(())
    }

    /// Block-wise ripple subtraction. Caller guarantees `self >= rhs`.
    pub(crate) fn sub_unchecked(&mut self, rhs: &BigUint) {
        let mut borrow = false;
        for (dst, &src) in self.blocks.iter_mut().zip(rhs.blocks.iter()) {
            (*dst, borrow) = sub_with_borrow(*dst, src, borrow);
        }
        for dst in self.blocks.iter_mut().skip(rhs.blocks.len()) {
            if !borrow {
                break;
            }
            (*dst, borrow) = dst.overflowing_sub(1);
        }
        debug_assert!(!borrow, "borrow out of the top block");
        self.normalize();
    }
}
