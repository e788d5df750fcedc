//! Production engine: iterative deepening under a wall-clock budget.

use crate::board::position::{Position, Side};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchBudget};
use crate::errors::EngineError;
use crate::search::iterative_deepening::best_move;

#[derive(Debug, Default)]
pub struct IterativeEngine;

impl IterativeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for IterativeEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        budget: &SearchBudget,
    ) -> Result<EngineOutput, EngineError> {
        let outcome = best_move(position, side, budget.as_duration());

        let mut info_lines = Vec::new();
        info_lines.push(format!(
            "info string iterative_engine depth {} score {} nodes {}",
            outcome.reached_depth, outcome.score, outcome.stats.nodes
        ));
        info_lines.push(format!(
            "info string tt probes {} hits {} cutoffs {} beta_cutoffs {} workers_timed_out {}",
            outcome.stats.tt_probes,
            outcome.stats.tt_hits,
            outcome.stats.tt_cutoffs,
            outcome.stats.beta_cutoffs,
            outcome.stats.workers_timed_out
        ));

        Ok(EngineOutput {
            best_move: outcome.best_move,
            score: outcome.score,
            reached_depth: outcome.reached_depth,
            stats: outcome.stats,
            info_lines,
        })
    }
}
