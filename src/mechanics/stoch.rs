/// Stochastic mechanics: seeded sources and index sampling.
/// Sources are passed as `&mut dyn RngCore` so strategies stay object-safe
/// and any seedable generator can drive a game.
use std::collections::BTreeSet;

use bevy_prng::WyRand;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_core::{RngCore, SeedableRng};

use crate::error::{ChaosError, ChaosResult};

/// WyRand from a u64 seed (little-endian bytes, as the seed array expects).
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Per-run seed derived from a base seed (SplitMix64 finalizer).
#[inline]
pub fn derive_seed(base: u64, run: u64) -> u64 {
    let mut z = base.wrapping_add(run.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform index in `0..n`.
#[inline]
pub fn uniform_index(n: usize, rng: &mut dyn RngCore) -> ChaosResult<usize> {
    if n == 0 {
        return Err(ChaosError::NoEligibleVertex { vertex_count: 0, excluded: Vec::new() });
    }
    Ok(rng.random_range(0..n))
}

/// Uniform choice from `0..n` minus `excluded`.
/// Excluded indexes outside `0..n` are ignored.
pub fn choose_excluding(
    n: usize,
    excluded: &BTreeSet<usize>,
    rng: &mut dyn RngCore,
) -> ChaosResult<usize> {
    let eligible: Vec<usize> = (0..n).filter(|i| !excluded.contains(i)).collect();
    eligible
        .choose(rng)
        .copied()
        .ok_or_else(|| ChaosError::NoEligibleVertex {
            vertex_count: n,
            excluded: excluded.iter().copied().collect(),
        })
}
