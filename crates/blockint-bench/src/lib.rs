//! Operand generators for the blockint benchmarks.
//!
//! - [`random_biguint`]: a full-width value of exactly `blocks` blocks.
//! - [`random_operands`]: a deterministic batch of such values.
//! - [`SIZES`]: the block counts every size-parameterized bench sweeps.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blockint_core::Block;
use blockint_uint::BigUint;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Block counts swept by the size-parameterized benches.
pub const SIZES: [usize; 4] = [1, 2, 8, 32];

/// A value of exactly `blocks` blocks with a nonzero top block.
pub fn random_biguint(rng: &mut ChaCha8Rng, blocks: usize) -> BigUint {
    let mut raw: Vec<Block> = (0..blocks.max(1)).map(|_| rng.next_u64()).collect();
    if let Some(top) = raw.last_mut() {
        *top |= 1 << 63;
    }
    BigUint::from_blocks(&raw)
}

/// `count` values of `blocks` blocks, reproducible from `seed`.
pub fn random_operands(seed: u64, count: usize, blocks: usize) -> Vec<BigUint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| random_biguint(&mut rng, blocks)).collect()
}
