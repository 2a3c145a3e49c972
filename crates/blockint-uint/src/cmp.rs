//! Ordering.
//!
//! Normalization makes block count a proxy for magnitude: a shorter
//! sequence is always smaller. Equal lengths compare from the most
//! significant block down. Equality is the derived element-wise one.

use std::cmp::Ordering;

use crate::biguint::BigUint;

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_trivial() && other.is_trivial() {
            return self.blocks[0].cmp(&other.blocks[0]);
        }
        self.blocks
            .len()
            .cmp(&other.blocks.len())
            .then_with(|| self.blocks.iter().rev().cmp(other.blocks.iter().rev()))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
