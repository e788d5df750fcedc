//! Common engine interface.
//!
//! Engines are handed a position and a budget and answer with a move plus
//! whatever diagnostics they gathered. `Send` so a match harness can hand
//! engines to worker threads.

use std::time::Duration;

use crate::board::position::{Position, Side};
use crate::errors::EngineError;
use crate::search::iterative_deepening::SearchStats;

/// Per-move search budget.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    /// Wall-clock seconds the engine may spend on one move.
    pub time_limit_s: f64,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self { time_limit_s: 1.0 }
    }
}

impl SearchBudget {
    pub fn from_seconds(time_limit_s: f64) -> Self {
        Self { time_limit_s }
    }

    #[inline]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.time_limit_s.max(0.0))
    }
}

/// Everything an engine reports for one move choice.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` means the side to move must pass.
    pub best_move: Option<u8>,
    pub score: i32,
    pub reached_depth: u8,
    pub stats: SearchStats,
    /// Human-readable diagnostics, one line each, for the caller to print.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    /// Resets any per-game state. Stateless engines keep the default no-op.
    fn new_game(&mut self) {}

    /// Chooses a move for `side` in `position` within `budget`.
    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        budget: &SearchBudget,
    ) -> Result<EngineOutput, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::SearchBudget;
    use std::time::Duration;

    #[test]
    fn budget_conversion_clamps_negatives() {
        assert_eq!(
            SearchBudget::from_seconds(-1.0).as_duration(),
            Duration::ZERO
        );
        assert_eq!(
            SearchBudget::from_seconds(0.25).as_duration(),
            Duration::from_millis(250)
        );
    }
}
