//! Operator forwarding.
//!
//! Each arithmetic module implements the in-place `OpAssign<&BigUint>`
//! form. Everything here forwards the owned and borrowed combinations to
//! it, so copying operators construct a new value and compound operators
//! mutate the receiver.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign, Mul, MulAssign,
    Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

use crate::biguint::BigUint;

/// Forward the owned-rhs assign form and all four binary forms to an
/// existing `OpAssign<&BigUint>` impl.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<BigUint> for BigUint {
            fn $op_assign(&mut self, rhs: BigUint) {
                $OpAssign::$op_assign(self, &rhs);
            }
        }

        impl $Op<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $op(self, rhs: &BigUint) -> BigUint {
                let mut out = self.clone();
                $OpAssign::$op_assign(&mut out, rhs);
                out
            }
        }

        impl $Op<&BigUint> for BigUint {
            type Output = BigUint;

            fn $op(mut self, rhs: &BigUint) -> BigUint {
                $OpAssign::$op_assign(&mut self, rhs);
                self
            }
        }

        impl $Op<BigUint> for BigUint {
            type Output = BigUint;

            fn $op(mut self, rhs: BigUint) -> BigUint {
                $OpAssign::$op_assign(&mut self, &rhs);
                self
            }
        }

        impl $Op<BigUint> for &BigUint {
            type Output = BigUint;

            fn $op(self, rhs: BigUint) -> BigUint {
                $Op::$op(self, &rhs)
            }
        }
    };
}

impl SubAssign<&BigUint> for BigUint {
    /// # Panics
    ///
    /// Panics if `rhs > self`. Use [`BigUint::try_sub_assign`] or
    /// [`BigUint::checked_sub`] to handle underflow.
    fn sub_assign(&mut self, rhs: &BigUint) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl DivAssign<&BigUint> for BigUint {
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`BigUint::try_div_assign`] or
    /// [`BigUint::div_mod`] to handle it.
    fn div_assign(&mut self, rhs: &BigUint) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{e}");
        }
    }
}

impl RemAssign<&BigUint> for BigUint {
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use [`BigUint::try_rem_assign`] or
    /// [`BigUint::div_mod`] to handle it.
    fn rem_assign(&mut self, rhs: &BigUint) {
        if let Err(e) = self.try_rem_assign(rhs) {
            panic!("{e}");
        }
    }
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);

impl Shl<u64> for BigUint {
    type Output = BigUint;

    fn shl(mut self, shift: u64) -> BigUint {
        self <<= shift;
        self
    }
}

impl Shr<u64> for BigUint {
    type Output = BigUint;

    fn shr(mut self, shift: u64) -> BigUint {
        self >>= shift;
        self
    }
}
