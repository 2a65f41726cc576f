//! Converging two-pointer scan.
//!
//! Two indices walk inward from both edges. The water level is the highest
//! "lower end" seen so far: any cell between the pointers is bounded on both
//! sides by walls at least that tall. Always advancing the lower end keeps the
//! taller end as a guaranteed wall for the cell being consumed.
//!
//! Single pass, O(1) memory. This is the default strategy.

use crate::traits::TrapStrategy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TwoPointer;

impl TrapStrategy for TwoPointer {
    fn name(&self) -> &'static str {
        "two_pointer"
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        trap_two_pointer(terrain)
    }
}

/// Water trapped by `terrain` using converging indices.
///
/// ```
/// assert_eq!(rain_trap::trap_two_pointer(&[1, 4, 2, 5, 3, 6, 4, 7]), 6);
/// ```
pub fn trap_two_pointer(terrain: &[i64]) -> u64 {
    // `len - 1` below would underflow on an empty slice.
    if terrain.len() < 3 {
        return 0;
    }

    let (mut l, mut r) = (0, terrain.len() - 1);
    let mut level = i64::MIN;
    let mut trapped = 0u64;

    while l < r {
        let (hl, hr) = (terrain[l], terrain[r]);
        level = level.max(hl.min(hr));
        if hl < hr {
            trapped += level.abs_diff(hl);
            l += 1;
        } else {
            trapped += level.abs_diff(hr);
            r -= 1;
        }
    }

    trapped
}
