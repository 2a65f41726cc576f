//! Built-in trapped-water strategies.
//!
//! Each module implements [`TrapStrategy`](crate::traits::TrapStrategy) for a
//! unit struct and exposes a plain function:
//! - [`scan`]        : prefix/suffix running max into a level array.
//! - [`two_pointer`] : converging indices, O(1) memory (default).
//! - [`minimal`]     : split at the maximum, two constant-memory folds.
//! - [`stair`]       : lowest-end-first merge plus one running-max fold.

use std::fmt;
use std::str::FromStr;

use crate::traits::TrapStrategy;

pub mod minimal;
pub mod scan;
pub mod stair;
pub mod two_pointer;

use minimal::Minimal;
use scan::ScanMax;
use stair::Stair;
use two_pointer::TwoPointer;

/// Closed set of built-in strategies, selectable at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    Scan,
    #[default]
    TwoPointer,
    Minimal,
    Stair,
}

impl Strategy {
    /// Every built-in strategy, in the order used by the C ABI index.
    pub const ALL: [Strategy; 4] = [
        Strategy::Scan,
        Strategy::TwoPointer,
        Strategy::Minimal,
        Strategy::Stair,
    ];

    /// Strategy at position `index` of [`Strategy::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn as_dyn(self) -> &'static dyn TrapStrategy {
        match self {
            Strategy::Scan => &ScanMax,
            Strategy::TwoPointer => &TwoPointer,
            Strategy::Minimal => &Minimal,
            Strategy::Stair => &Stair,
        }
    }
}

impl TrapStrategy for Strategy {
    fn name(&self) -> &'static str {
        self.as_dyn().name()
    }

    fn trapped_water(&self, terrain: &[i64]) -> u64 {
        match self {
            Strategy::Scan => scan::trap_scan(terrain),
            Strategy::TwoPointer => two_pointer::trap_two_pointer(terrain),
            Strategy::Minimal => minimal::trap_minimal(terrain),
            Strategy::Stair => stair::trap_stair(terrain),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == value)
            .ok_or_else(|| format!("unknown strategy '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_pointer() {
        assert_eq!(Strategy::default(), Strategy::TwoPointer);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
            assert_eq!(s.to_string(), s.name());
        }
        assert!("bogus".parse::<Strategy>().is_err());
    }

    #[test]
    fn index_lookup() {
        assert_eq!(Strategy::from_index(0), Some(Strategy::Scan));
        assert_eq!(Strategy::from_index(3), Some(Strategy::Stair));
        assert_eq!(Strategy::from_index(4), None);
    }

    #[test]
    fn dispatch_matches_unit_structs() {
        let terrain = [4, 2, 0, 3, 2, 5];
        assert_eq!(Strategy::Scan.trapped_water(&terrain), ScanMax.trapped_water(&terrain));
        assert_eq!(
            Strategy::TwoPointer.trapped_water(&terrain),
            TwoPointer.trapped_water(&terrain)
        );
        assert_eq!(Strategy::Minimal.trapped_water(&terrain), Minimal.trapped_water(&terrain));
        assert_eq!(Strategy::Stair.trapped_water(&terrain), Stair.trapped_water(&terrain));
    }
}
