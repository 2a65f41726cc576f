//! Prefix/suffix running maximum.
//!
//! The water surface over the terrain rises as a staircase from the left edge
//! up to the global maximum and falls as a staircase from there to the right
//! edge. We materialise that surface into a level array:
//! - inclusive running max from index 0 up to the maximum,
//! - inclusive running max from the last index back down to the maximum,
//!
//! and sum `level[i] - height[i]`. Left of the maximum the prefix max is
//! already the lower bound (the right side is bounded by the maximum itself),
//! and symmetrically on the right, so each half needs only one scan.
//!
//! Needs O(n) auxiliary memory; kept mainly as a differential baseline.

use crate::traits::TrapStrategy;
use crate::utils::max_position;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanMax;

impl TrapStrategy for ScanMax {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        trap_scan(terrain)
    }
}

/// Water trapped by `terrain` using a materialised level array.
///
/// ```
/// assert_eq!(rain_trap::trap_scan(&[1, 4, 2, 5, 3, 6, 4, 7]), 6);
/// ```
pub fn trap_scan(terrain: &[i64]) -> u64 {
    if terrain.len() < 3 {
        return 0;
    }
    let Some(peak) = max_position(terrain) else {
        return 0;
    };

    let mut level = vec![0i64; terrain.len()];
    running_max(&terrain[..=peak], &mut level[..=peak]);
    running_max_rev(&terrain[peak..], &mut level[peak..]);

    level
        .iter()
        .zip(terrain)
        .map(|(&surface, &h)| surface.abs_diff(h))
        .sum()
}

/// Inclusive left-to-right running max of `src` into `dst`.
fn running_max(src: &[i64], dst: &mut [i64]) {
    let mut acc = i64::MIN;
    for (d, &h) in dst.iter_mut().zip(src) {
        acc = acc.max(h);
        *d = acc;
    }
}

/// Inclusive right-to-left running max of `src` into `dst`.
fn running_max_rev(src: &[i64], dst: &mut [i64]) {
    let mut acc = i64::MIN;
    for (d, &h) in dst.iter_mut().rev().zip(src.iter().rev()) {
        acc = acc.max(h);
        *d = acc;
    }
}
