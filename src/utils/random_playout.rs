//! Seeded random playouts, used to produce realistic mid-game positions for
//! tests and benchmarks.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::board::position::{Position, Side};
use crate::move_generation::legal_move_generator::legal_moves;

/// Plays `plies` uniformly random moves from the starting position,
/// alternating sides and passing silently when a side has no move.
pub fn random_reachable_position(rng: &mut StdRng, plies: usize) -> Position {
    let mut pos = Position::start_pos();
    let mut side = Side::Black;
    for _ in 0..plies {
        let moves = legal_moves(&pos, side);
        if let Some(&square) = moves.choose(rng) {
            pos.apply_move(square, side);
        }
        side = side.opposite();
    }
    pos
}
