//! Core trait for trapped-water strategies.
//!
//! To plug a new algorithm into the engine, implement [`TrapStrategy`] for a
//! (usually zero-sized) struct.
//!
//! Contract every implementation must honour:
//! - The terrain is only read, never mutated or retained.
//! - Terrains with fewer than three cells trap nothing.
//! - The result equals the textbook definition: for each cell, the lower of
//!   the tallest wall to its left and to its right (both inclusive of the cell
//!   itself), minus its own height, summed over all cells.
//!
//! The engine relies on the last point when cross-checking strategies.

/// A way of computing the water trapped by a terrain.
pub trait TrapStrategy {
    /// Short, stable identifier (used in benchmark ids and probe output).
    fn name(&self) -> &'static str;

    /// Total water retained by `terrain`.
    fn trapped_water(&self, terrain: &[i64]) -> u64;
}

impl<S: TrapStrategy + ?Sized> TrapStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        (**self).trapped_water(terrain)
    }
}
