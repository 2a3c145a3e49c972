//! The [`Block`] word and single-word carry/borrow primitives.
//!
//! Every multi-block routine in the workspace ripples through these two
//! helpers, so a carry or borrow is always exactly one bit wide.

/// Fixed-width unsigned word; the atomic unit of big-integer storage.
pub type Block = u64;

/// Number of bits in one [`Block`].
pub const BITS_PER_BLOCK: u32 = Block::BITS;

/// Largest value a single [`Block`] can hold.
pub const BLOCK_MAX: Block = Block::MAX;

/// Add `a + b + carry`, returning the wrapped sum and the carry-out.
#[inline]
pub fn add_with_carry(a: Block, b: Block, carry: bool) -> (Block, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(Block::from(carry));
    (sum, c1 || c2)
}

/// Subtract `a - b - borrow`, returning the wrapped difference and the borrow-out.
#[inline]
pub fn sub_with_borrow(a: Block, b: Block, borrow: bool) -> (Block, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(Block::from(borrow));
    (diff, b1 || b2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn carry_out_on_wrap() {
        assert_eq!(add_with_carry(BLOCK_MAX, 1, false), (0, true));
        assert_eq!(add_with_carry(BLOCK_MAX, 0, true), (0, true));
        assert_eq!(add_with_carry(BLOCK_MAX, BLOCK_MAX, true), (BLOCK_MAX, true));
    }

    #[test]
    fn no_carry_below_max() {
        assert_eq!(add_with_carry(1, 2, true), (4, false));
    }

    #[test]
    fn borrow_out_on_wrap() {
        assert_eq!(sub_with_borrow(0, 1, false), (BLOCK_MAX, true));
        assert_eq!(sub_with_borrow(0, 0, true), (BLOCK_MAX, true));
        assert_eq!(sub_with_borrow(5, 5, false), (0, false));
    }

    #[test]
    fn bits_per_block_matches_word() {
        assert_eq!(BITS_PER_BLOCK as usize, std::mem::size_of::<Block>() * 8);
    }

    proptest! {
        #[test]
        fn add_with_carry_matches_wide_sum(a in any::<u64>(), b in any::<u64>(), c in any::<bool>()) {
            let wide = a as u128 + b as u128 + c as u128;
            let (sum, carry) = add_with_carry(a, b, c);
            prop_assert_eq!(sum, wide as u64);
            prop_assert_eq!(carry, wide >> 64 != 0);
        }

        #[test]
        fn sub_undoes_add(a in any::<u64>(), b in any::<u64>(), c in any::<bool>()) {
            let (sum, carry) = add_with_carry(a, b, c);
            let (back, borrow) = sub_with_borrow(sum, b, c);
            prop_assert_eq!(back, a);
            prop_assert_eq!(borrow, carry);
        }
    }
}
