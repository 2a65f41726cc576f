//! Trapped rain water
//!
//! Given a terrain as a sequence of heights, compute how much water stays
//! behind after rain: every cell holds water up to the lower of the tallest
//! wall on its left and the tallest wall on its right.
//!
//! ## Core idea
//! 1. Pick a [`Strategy`] (or implement [`TrapStrategy`] yourself).
//! 2. Run it through a [`TrapEngine`], optionally cross-checking every other
//!    strategy on the same terrain.
//! 3. Or just call [`compute_trapped_water`], which uses the two-pointer
//!    strategy.
//!
//! All strategies compute the same total in O(n) time; they differ only in
//! memory traffic and auxiliary allocation.
//!
//! ## Quick start
//! ```
//! use rain_trap::{compute_trapped_water, Strategy, TrapEngineBuilder};
//!
//! let terrain = [1, 4, 2, 5, 3, 6, 4, 7];
//! assert_eq!(compute_trapped_water(&terrain), 6);
//!
//! let engine = TrapEngineBuilder::new()
//!     .with_strategy(Strategy::Scan)
//!     .with_cross_check(true)
//!     .build();
//! assert_eq!(engine.run_checked(&terrain).unwrap(), 6);
//! ```
//!
//! ## Built-in strategies
//! The `strategies` module contains:
//! - Scan: prefix/suffix running max into an auxiliary level array
//! - Two-pointer: converging indices with a running water level (default)
//! - Minimal: split at the global maximum, two constant-memory folds
//! - Stair: merge both ends lowest-first, then a single running-max fold
//!
//! The [`ffi`] module exposes the default strategy over a C ABI.

pub mod builder;
pub mod engine;
pub mod ffi;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::TrapEngineBuilder;
pub use crate::engine::{TrapEngine, TrapError};
pub use crate::strategies::{
    minimal::trap_minimal, scan::trap_scan, stair::trap_stair, two_pointer::trap_two_pointer,
    Strategy,
};
pub use crate::traits::TrapStrategy;

/// Water trapped by `terrain`, computed with the default strategy.
///
/// ```
/// assert_eq!(rain_trap::compute_trapped_water(&[3, 0, 1, 0, 3]), 8);
/// assert_eq!(rain_trap::compute_trapped_water(&[]), 0);
/// ```
#[inline]
pub fn compute_trapped_water(terrain: &[i64]) -> u64 {
    Strategy::default().trapped_water(terrain)
}
