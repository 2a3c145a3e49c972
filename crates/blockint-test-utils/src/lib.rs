//! Property-test strategies and fixtures for blockint development.
//!
//! Strategies in this crate only ever produce normalized values, so tests
//! can compare results with `==` directly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use blockint_core::{Block, BLOCK_MAX};
use blockint_uint::BigUint;
use proptest::prelude::*;

/// One block biased toward the edges where carries and borrows happen.
pub fn arb_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        3 => any::<Block>(),
        1 => Just(0),
        1 => Just(1),
        1 => Just(BLOCK_MAX),
        1 => Just(1 << 63),
    ]
}

/// A value of between one and `max_blocks` blocks.
pub fn arb_biguint(max_blocks: usize) -> impl Strategy<Value = BigUint> {
    prop::collection::vec(arb_block(), 1..=max_blocks.max(1))
        .prop_map(|blocks| BigUint::from_blocks(&blocks))
}

/// A nonzero value of between one and `max_blocks` blocks.
pub fn arb_nonzero_biguint(max_blocks: usize) -> impl Strategy<Value = BigUint> {
    arb_biguint(max_blocks).prop_filter("nonzero", |v| !v.is_zero())
}

fn arb_u128() -> impl Strategy<Value = u128> {
    prop_oneof![
        3 => any::<u128>(),
        1 => any::<u64>().prop_map(u128::from),
        1 => Just(0u128),
        1 => Just(u128::from(BLOCK_MAX)),
        1 => Just(u128::from(BLOCK_MAX) + 1),
        1 => Just(u128::MAX),
    ]
}

/// Pairs of double words, for checking against native `u128` arithmetic.
pub fn arb_u128_pair() -> impl Strategy<Value = (u128, u128)> {
    (arb_u128(), arb_u128())
}

/// Decimal digit strings up to `max_digits` long, leading zeros included.
pub fn arb_decimal(max_digits: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(b'0'..=b'9', 1..=max_digits.max(1))
        .prop_map(|digits| digits.into_iter().map(char::from).collect())
}

/// Strip leading zeros, keeping a lone `"0"` for the zero value.
pub fn canonical_decimal(s: &str) -> &str {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}
