//! Assorted helpers shared by strategies, tests, benches and the probe.

use rand::Rng;

/// Index of the first occurrence of the maximum height, `None` if empty.
///
/// `Iterator::max_by_key` keeps the *last* maximum, which would shift the
/// split point for plateaus, so the scan is spelled out.
#[inline]
pub fn max_position(terrain: &[i64]) -> Option<usize> {
    let (&first, rest) = terrain.split_first()?;
    let mut best = first;
    let mut pos = 0;
    for (i, &h) in rest.iter().enumerate() {
        if h > best {
            best = h;
            pos = i + 1;
        }
    }
    Some(pos)
}

/// Quadratic reference: for every cell, look left and right for the
/// tallest wall. Only meant for verifying the linear strategies.
pub fn naive_trapped_water(terrain: &[i64]) -> u64 {
    let mut total = 0u64;
    for (i, &h) in terrain.iter().enumerate() {
        let left = terrain[..=i].iter().copied().max().unwrap_or(h);
        let right = terrain[i..].iter().copied().max().unwrap_or(h);
        total += left.min(right).abs_diff(h);
    }
    total
}

/// Terrain of `len` cells with heights drawn uniformly from `[0, max_height)`.
///
/// A non-positive `max_height` yields a flat terrain of zeros.
pub fn random_terrain<R: Rng>(rng: &mut R, len: usize, max_height: i64) -> Vec<i64> {
    if max_height <= 0 {
        return vec![0; len];
    }
    (0..len).map(|_| rng.gen_range(0..max_height)).collect()
}

/// Reproducible jagged terrain with heights in `[0, period)`.
///
/// Uses a multiplicative hash of the index so valleys of many widths appear
/// without pulling in an RNG.
pub fn deterministic_terrain(len: usize, period: u64) -> Vec<i64> {
    let period = period.max(1);
    (0..len as u64)
        .map(|i| (i.wrapping_mul(2_654_435_761) % period) as i64)
        .collect()
}
