//! Strategy runner with optional cross-checking.
//!
//! The engine wraps a chosen [`Strategy`] and, when cross-checking is enabled,
//! evaluates every other built-in strategy on the same terrain and reports the
//! first disagreement. Cross-checking multiplies the work by the number of
//! strategies and is meant for verification runs, not hot paths.

use thiserror::Error;

use crate::strategies::Strategy;
use crate::traits::TrapStrategy;

/// Failure of a cross-checked run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrapError {
    #[error("strategy '{strategy}' computed {got}, but '{reference}' computed {expected}")]
    Disagreement {
        reference: Strategy,
        expected: u64,
        strategy: Strategy,
        got: u64,
    },
}

/// Runs a trapped-water strategy over caller-supplied terrains.
///
/// Typical usage:
/// ```
/// use rain_trap::TrapEngine;
///
/// let engine = TrapEngine::new();
/// assert_eq!(engine.run(&[3, 0, 1, 0, 3]), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrapEngine {
    strategy: Strategy,
    cross_check: bool,
}

impl TrapEngine {
    /// Engine using the default (two-pointer) strategy, no cross-checking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine using `strategy`, no cross-checking.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            cross_check: false,
        }
    }

    pub(crate) fn from_parts(strategy: Strategy, cross_check: bool) -> Self {
        Self {
            strategy,
            cross_check,
        }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether [`run_checked`](Self::run_checked) evaluates all strategies.
    pub fn cross_check(&self) -> bool {
        self.cross_check
    }

    /// Water trapped by `terrain` using the configured strategy.
    pub fn run(&self, terrain: &[i64]) -> u64 {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("trap_run", strategy = self.strategy.name(), cells = terrain.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.strategy.trapped_water(terrain)
    }

    /// Like [`run`](Self::run), but with cross-checking enabled every other
    /// built-in strategy must agree with the configured one.
    pub fn run_checked(&self, terrain: &[i64]) -> Result<u64, TrapError> {
        let expected = self.run(terrain);
        if !self.cross_check {
            return Ok(expected);
        }

        for other in Strategy::ALL.into_iter().filter(|&s| s != self.strategy) {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("cross_check", strategy = other.name());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let got = other.trapped_water(terrain);
            if got != expected {
                #[cfg(feature = "tracing")]
                tracing::warn!(reference = %self.strategy, strategy = %other, expected, got, "strategies disagree");
                return Err(TrapError::Disagreement {
                    reference: self.strategy,
                    expected,
                    strategy: other,
                    got,
                });
            }
        }
        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_strategy() {
        let engine = TrapEngine::new();
        assert_eq!(engine.strategy(), Strategy::TwoPointer);
        assert!(!engine.cross_check());
    }

    #[test]
    fn every_strategy_runs_the_worked_example() {
        for s in Strategy::ALL {
            assert_eq!(TrapEngine::with_strategy(s).run(&[1, 4, 2, 5, 3, 6, 4, 7]), 6);
        }
    }

    #[test]
    fn cross_checked_run_agrees() {
        let engine = TrapEngine::from_parts(Strategy::Stair, true);
        assert_eq!(engine.run_checked(&[0, 1, -1, 2, 1, 0, 1, 3, 2, 1, 2, 1]), Ok(7));
        assert_eq!(engine.run_checked(&[]), Ok(0));
    }

    #[test]
    fn disagreement_message_names_both_strategies() {
        let err = TrapError::Disagreement {
            reference: Strategy::Scan,
            expected: 3,
            strategy: Strategy::Minimal,
            got: 4,
        };
        assert_eq!(
            err.to_string(),
            "strategy 'minimal' computed 4, but 'scan' computed 3"
        );
    }
}
