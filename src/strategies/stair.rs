//! Lowest-end-first merge followed by one stair fold.
//!
//! Reordering the cells by repeatedly taking the lower of the two current
//! ends (like the two-pointer scan) produces a sequence that traps exactly
//! the same water as the terrain but ends at the maximum. For a terrain whose
//! maximum is last, the answer is a single left-to-right running-max fold.
//!
//! The merge walks the slice iterator from both ends with `next` and
//! `next_back`, so there is no indexing and no bounds checks in the hot loop.

use crate::strategies::minimal::stair_fold;
use crate::traits::TrapStrategy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stair;

impl TrapStrategy for Stair {
    fn name(&self) -> &'static str {
        "stair"
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        trap_stair(terrain)
    }
}

/// Water trapped by `terrain` using a single iterator pipeline.
///
/// ```
/// assert_eq!(rain_trap::trap_stair(&[1, 0, 2, 0, 1]), 2);
/// ```
pub fn trap_stair(terrain: &[i64]) -> u64 {
    if terrain.len() < 3 {
        return 0;
    }
    stair_fold(LowestFirst::new(terrain))
}

/// Yields the cells of a terrain lowest end first.
///
/// Ties take the left end. The final remaining cell is never yielded: it is
/// at least as tall as everything before it and holds no water.
struct LowestFirst<'a> {
    inner: std::slice::Iter<'a, i64>,
    left: Option<i64>,
    right: Option<i64>,
}

impl<'a> LowestFirst<'a> {
    fn new(terrain: &'a [i64]) -> Self {
        let mut inner = terrain.iter();
        let left = inner.next().copied();
        let right = inner.next_back().copied();
        Self { inner, left, right }
    }
}

impl Iterator for LowestFirst<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let (left, right) = (self.left?, self.right?);
        if left <= right {
            self.left = self.inner.next().copied();
            Some(left)
        } else {
            self.right = self.inner.next_back().copied();
            Some(right)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match (self.left, self.right) {
            (Some(_), Some(_)) => self.inner.len() + 1,
            _ => 0,
        };
        (n, Some(n))
    }
}
