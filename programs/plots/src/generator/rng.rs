//! Hash-chained random draws.
//!
//! Every draw hashes the incoming seed with keccak-256 and takes the result
//! modulo the number of options. The hashed value is handed back as the next
//! seed, so callers thread it through explicitly and no draw is ever repeated.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::errors::PlotError;
use crate::generator::U256;

/// Re-roll allowance per value of the coordinate domain.
pub const REROLLS_PER_CELL: u64 = 16;

/// Re-roll allowance every domain gets regardless of its size.
pub const MIN_REROLLS: u64 = 1024;

/// keccak-256 over the 32-byte big-endian encoding of `seed`.
pub fn hash_seed(seed: U256) -> U256 {
    let mut bytes = [0u8; 32];
    seed.to_big_endian(&mut bytes);
    U256::from_big_endian(&keccak::hash(&bytes).0)
}

/// Returns the next seed and `offset + next_seed % options`.
///
/// `options` must be non-zero.
pub fn next_rnd(seed: U256, offset: u32, options: u32) -> (U256, u32) {
    let next = hash_seed(seed);
    let value = (next % U256::from(options)).low_u32();
    (next, offset + value)
}

/// Re-roll budget for a domain of `size` values. Filling the whole domain
/// takes about `size * ln(size)` re-rolls, well inside this bound.
pub fn reroll_budget(size: u32) -> u64 {
    MIN_REROLLS + REROLLS_PER_CELL * size as u64
}

/// Draws `length` distinct values in `[0, size)`, sorted ascending.
///
/// Duplicates are resolved by redrawing the later element of the first
/// equal pair and re-sorting until the run is strictly increasing.
pub fn unique_coords(seed: U256, length: usize, size: u32) -> Result<(U256, Vec<u32>)> {
    unique_coords_within(seed, length, size, reroll_budget(size))
}

fn unique_coords_within(
    mut seed: U256,
    length: usize,
    size: u32,
    max_rerolls: u64,
) -> Result<(U256, Vec<u32>)> {
    require!(length as u64 <= size as u64, PlotError::CoordinateDomainTooSmall);

    let mut coords = Vec::with_capacity(length);
    for _ in 0..length {
        let (next, value) = next_rnd(seed, 0, size);
        seed = next;
        coords.push(value);
    }
    coords.sort_unstable();

    let mut rerolls = 0u64;
    while let Some(index) = first_duplicate(&coords) {
        require!(rerolls < max_rerolls, PlotError::CoordinateRetriesExhausted);
        let (next, value) = next_rnd(seed, 0, size);
        seed = next;
        coords[index] = value;
        coords.sort_unstable();
        rerolls += 1;
    }

    Ok((seed, coords))
}

fn first_duplicate(sorted: &[u32]) -> Option<usize> {
    sorted
        .windows(2)
        .position(|pair| pair[0] == pair[1])
        .map(|i| i + 1)
}
