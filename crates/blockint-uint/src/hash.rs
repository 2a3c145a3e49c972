//! 64-bit Murmur digest over the block sequence.

use std::hash::{Hash, Hasher};

use crate::biguint::BigUint;

const SEED: u64 = 0xc70f_6907;
const MIX: u64 = 0xc6a4_a793_5bd1_e995;
const SHIFT: u32 = 47;

impl BigUint {
    /// Murmur64-style digest of the normalized blocks.
    ///
    /// Stable across runs and platforms, so it may be persisted or compared
    /// across processes. Equal values always hash equal.
    pub fn murmur_hash(&self) -> u64 {
        let byte_len = (self.blocks.len() as u64).wrapping_mul(8);
        let mut h = SEED ^ byte_len.wrapping_mul(MIX);
        for &block in &self.blocks {
            let mut k = block.wrapping_mul(MIX);
            k ^= k >> SHIFT;
            k = k.wrapping_mul(MIX);
            h ^= k;
            h = h.wrapping_mul(MIX);
        }
        h ^= h >> SHIFT;
        h = h.wrapping_mul(MIX);
        h ^= h >> SHIFT;
        h
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.murmur_hash());
    }
}
