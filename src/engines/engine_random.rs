//! Baseline engine: uniformly random legal move. Useful as a sparring
//! partner in the match harness and as a sanity floor for engine strength.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::position::{Position, Side};
use crate::engines::engine_trait::{Engine, EngineOutput, SearchBudget};
use crate::errors::EngineError;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        side: Side,
        _budget: &SearchBudget,
    ) -> Result<EngineOutput, EngineError> {
        let moves = legal_moves(position, side);
        let best_move = moves.choose(&mut self.rng).copied();
        Ok(EngineOutput {
            best_move,
            ..EngineOutput::default()
        })
    }
}
