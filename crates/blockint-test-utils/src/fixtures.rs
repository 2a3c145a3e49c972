//! Known values with independently checked decimal forms.
//!
//! - [`factorial`] builds `n!` by repeated multiplication.
//! - [`pow`] builds `base^exp` by square-and-multiply.
//! - [`FACTORIAL_30`] and friends pin the expected digits.

use blockint_uint::BigUint;

/// `30!`, a three-digit-block product.
pub const FACTORIAL_30: &str = "265252859812191058636308480000000";

/// `2^128`, the smallest three-block value.
pub const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// `10^40`.
pub const TEN_POW_40: &str = "10000000000000000000000000000000000000000";

/// `n!`.
pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= &BigUint::from(k);
    }
    acc
}

/// `base^exp` by binary exponentiation.
pub fn pow(base: &BigUint, mut exp: u32) -> BigUint {
    let mut result = BigUint::one();
    let mut square = base.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &square;
        }
        exp >>= 1;
        if exp > 0 {
            square = &square * &square;
        }
    }
    result
}

/// A value with every bit set across `blocks` blocks.
pub fn all_ones(blocks: usize) -> BigUint {
    BigUint::from_blocks(&vec![u64::MAX; blocks])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_matches_known_digits() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(20).to_u64(), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial(30).to_decimal_string(), FACTORIAL_30);
    }

    #[test]
    fn pow_matches_known_digits() {
        assert_eq!(pow(&BigUint::from(2u64), 128).to_decimal_string(), TWO_POW_128);
        assert_eq!(pow(&BigUint::from(10u64), 40).to_decimal_string(), TEN_POW_40);
        assert_eq!(pow(&BigUint::from(7u64), 0), BigUint::one());
    }

    #[test]
    fn all_ones_is_power_of_two_minus_one() {
        let mut v = all_ones(3);
        v.increment();
        assert_eq!(v.blocks(), &[0, 0, 0, 1]);
    }
}
