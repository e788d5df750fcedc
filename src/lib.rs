//! Crate root module declarations for the Olive Othello engine project.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! search, engines, and utility helpers) so the binary, tests, and benches
//! can import stable module paths.

pub mod errors;

pub mod board {
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_generator;
    pub mod reference_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod negamax;
    pub mod threading;
    pub mod transposition_table;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod flat_fen_generator;
    pub mod flat_fen_parser;
    pub mod random_playout;
    pub mod render_position;
}
