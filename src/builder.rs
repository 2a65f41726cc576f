use crate::strategies::Strategy;
use crate::TrapEngine;

#[derive(Clone, Copy, Debug, Default)]
pub struct TrapEngineBuilder {
    strategy: Option<Strategy>,
    cross_check: bool,
}

impl TrapEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check = enabled;
        self
    }
    pub fn build(self) -> TrapEngine {
        TrapEngine::from_parts(self.strategy.unwrap_or_default(), self.cross_check)
    }
}
