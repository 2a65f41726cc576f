//! Split at the global maximum, fold each side towards it.
//!
//! Everything left of the maximum is bounded on the right by the maximum, so
//! its water depends only on the running max from the left edge. The mirror
//! holds on the right. Two folds with a single accumulator each; no
//! auxiliary storage beyond the split index.

use crate::traits::TrapStrategy;
use crate::utils::max_position;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minimal;

impl TrapStrategy for Minimal {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        trap_minimal(terrain)
    }
}

/// Water trapped by `terrain` with O(1) extra memory and two passes.
///
/// ```
/// assert_eq!(rain_trap::trap_minimal(&[3, 0, 1, 0, 3]), 8);
/// ```
pub fn trap_minimal(terrain: &[i64]) -> u64 {
    if terrain.len() < 3 {
        return 0;
    }
    let Some(peak) = max_position(terrain) else {
        return 0;
    };
    let (rising, falling) = terrain.split_at(peak);

    stair_fold(rising.iter().copied()) + stair_fold(falling.iter().rev().copied())
}

/// Running-max fold: water above each height given the tallest wall so far.
///
/// The accumulator starts at `i64::MIN` so negative heights are handled.
#[inline]
pub(crate) fn stair_fold<I: Iterator<Item = i64>>(heights: I) -> u64 {
    heights
        .fold((i64::MIN, 0u64), |(step, water), h| {
            let step = step.max(h);
            (step, water + step.abs_diff(h))
        })
        .1
}
