//! Restoring long division.

use blockint_core::{ArithError, BITS_PER_BLOCK};

use crate::biguint::BigUint;

impl BigUint {
    /// Divide by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Cheaper than calling `/` and `%` separately when both are needed.
    /// Fails with [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_mod(&self, divisor: &BigUint) -> Result<(BigUint, BigUint), ArithError> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        if self.is_trivial() && divisor.is_trivial() {
            let (n, d) = (self.blocks[0], divisor.blocks[0]);
            return Ok((BigUint::from_block(n / d), BigUint::from_block(n % d)));
        }
        if self < divisor {
            return Ok((BigUint::zero(), self.clone()));
        }
        Ok(self.long_div(divisor))
    }

    /// Replace `self` with `self / divisor`.
    pub fn try_div_assign(&mut self, divisor: &BigUint) -> Result<(), ArithError> {
        let (quotient, _) = self.div_mod(divisor)?;
        *self = quotient;
        Ok(())
    }

    /// Replace `self` with `self % divisor`.
    pub fn try_rem_assign(&mut self, divisor: &BigUint) -> Result<(), ArithError> {
        let (_, remainder) = self.div_mod(divisor)?;
        *self = remainder;
        Ok(())
    }

    /// `self / divisor`, or `None` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigUint) -> Option<BigUint> {
        self.div_mod(divisor).ok().map(|(q, _)| q)
    }

    /// `self % divisor`, or `None` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigUint) -> Option<BigUint> {
        self.div_mod(divisor).ok().map(|(_, r)| r)
    }

    /// Bit-by-bit restoring division, most significant dividend bit first.
    ///
    /// The quotient grows only as its high bits turn on, so it never holds
    /// a zero top block mid-computation.
    #[tracing::instrument(
        skip_all,
        level = "trace",
        name = "BigUint::long_div",
        fields(dividend_blocks = self.blocks.len(), divisor_blocks = divisor.blocks.len())
    )]
    fn long_div(&self, divisor: &BigUint) -> (BigUint, BigUint) {
        let mut quotient = BigUint::zero();
        let mut remainder = BigUint::zero();

        for (index, &block) in self.blocks.iter().enumerate().rev() {
            for bit in (0..BITS_PER_BLOCK).rev() {
                let mask = 1 << bit;
                remainder <<= 1;
                if block & mask != 0 {
                    remainder.blocks[0] |= 1;
                }
                if remainder >= *divisor {
                    remainder.sub_unchecked(divisor);
                    if index >= quotient.blocks.len() {
                        quotient.blocks.resize(index + 1, 0);
                    }
                    quotient.blocks[index] |= mask;
                }
            }
        }

        quotient.normalize();
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockint_core::BLOCK_MAX;

    #[test]
    fn division_by_zero_fails() {
        let a = BigUint::from_blocks(&[1, 2]);
        assert_eq!(a.div_mod(&BigUint::zero()), Err(ArithError::DivisionByZero));
        let mut b = BigUint::from(5u64);
        assert_eq!(
            b.try_rem_assign(&BigUint::zero()),
            Err(ArithError::DivisionByZero)
        );
        assert_eq!(b.blocks(), &[5]);
    }

    #[test]
    fn trivial_fast_path() {
        let (q, r) = BigUint::from(47u64).div_mod(&BigUint::from(5u64)).unwrap();
        assert_eq!((q.blocks(), r.blocks()), (&[9][..], &[2][..]));
    }

    #[test]
    fn smaller_dividend_short_circuits() {
        let a = BigUint::from(7u64);
        let b = BigUint::from_blocks(&[0, 1]);
        let (q, r) = a.div_mod(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn two_block_by_one_block() {
        // 2^64 / 3 = 6148914691236517205 rem 1
        let (q, r) = BigUint::from_blocks(&[0, 1])
            .div_mod(&BigUint::from(3u64))
            .unwrap();
        assert_eq!(q.blocks(), &[6_148_914_691_236_517_205]);
        assert_eq!(r.blocks(), &[1]);
    }

    #[test]
    fn exact_multi_block_division() {
        let a = BigUint::from_blocks(&[BLOCK_MAX, BLOCK_MAX]);
        let b = BigUint::from_blocks(&[1, 1]);
        let (q, r) = a.div_mod(&b).unwrap();
        assert_eq!(q.blocks(), &[BLOCK_MAX]);
        assert!(r.is_zero());
    }

    #[test]
    fn quotient_is_normalized() {
        let a = BigUint::from_blocks(&[0, 0, 1]);
        let (q, r) = a.div_mod(&BigUint::from_blocks(&[0, 1])).unwrap();
        assert_eq!(q.blocks(), &[0, 1]);
        assert!(r.is_zero());
    }

    #[test]
    fn assign_variants() {
        let mut a = BigUint::from_blocks(&[10, 1]);
        a.try_div_assign(&BigUint::from_blocks(&[5, 1])).unwrap();
        assert_eq!(a, BigUint::one());

        let mut b = BigUint::from_blocks(&[10, 1]);
        b.try_rem_assign(&BigUint::from_blocks(&[5, 1])).unwrap();
        assert_eq!(b.blocks(), &[5]);
    }

    #[test]
    fn checked_variants() {
        let a = BigUint::from(9u64);
        assert_eq!(a.checked_div(&BigUint::from(2u64)), Some(BigUint::from(4u64)));
        assert_eq!(a.checked_rem(&BigUint::from(2u64)), Some(BigUint::one()));
        assert_eq!(a.checked_div(&BigUint::zero()), None);
    }
}
