//! Static board scoring.
//!
//! `evaluate` is the heuristic used at non-terminal leaves: positional
//! weights plus mobility and corner terms. `final_score` is the single
//! terminal scale used everywhere a finished game is scored; it is a scaled
//! disc differential so that any terminal value dominates any heuristic
//! value while preserving the ordering between win margins.

use crate::board::position::{Position, Side};
use crate::move_generation::legal_move_generator::legal_moves_bitboard;

/// Positional weight per square, row-major, top row first. Symmetric:
/// corners are strongest, squares adjacent to corners are liabilities.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; 64] = [
    20, -3, 11,  8,  8, 11, -3, 20,
    -3, -7, -4,  1,  1, -4, -7, -3,
    11, -4,  2,  2,  2,  2, -4, 11,
     8,  1,  2, -3, -3,  2,  1,  8,
     8,  1,  2, -3, -3,  2,  1,  8,
    11, -4,  2,  2,  2,  2, -4, 11,
    -3, -7, -4,  1,  1, -4, -7, -3,
    20, -3, 11,  8,  8, 11, -3, 20,
];

pub const MOBILITY_WEIGHT: i32 = 5;
pub const CORNER_WEIGHT: i32 = 25;
/// The four corner squares a1, h1, a8, h8.
pub const CORNER_MASK: u64 = 0x8100_0000_0000_0081;

/// Scale applied to the terminal disc differential. The heuristic cannot
/// reach +/-700, terminal values span +/-6400, so the two ranges never mix.
pub const TERMINAL_DISC_VALUE: i32 = 100;

/// Static heuristic for `side`, meaningful only at non-terminal nodes.
pub fn evaluate(position: &Position, side: Side) -> i32 {
    let own = position.discs(side);
    let opp = position.discs(side.opposite());

    let mut score = 0i32;
    for (square, weight) in SQUARE_WEIGHTS.iter().enumerate() {
        let bit = 1u64 << square;
        if own & bit != 0 {
            score += weight;
        } else if opp & bit != 0 {
            score -= weight;
        }
    }

    let own_mobility = legal_moves_bitboard(own, opp).count_ones() as i32;
    let opp_mobility = legal_moves_bitboard(opp, own).count_ones() as i32;
    score += MOBILITY_WEIGHT * (own_mobility - opp_mobility);

    let own_corners = (own & CORNER_MASK).count_ones() as i32;
    let opp_corners = (opp & CORNER_MASK).count_ones() as i32;
    score += CORNER_WEIGHT * (own_corners - opp_corners);

    score
}

/// Terminal score from black's point of view: scaled disc differential.
/// Negate via `Side::sign` for the side to move.
#[inline]
pub fn final_score(position: &Position) -> i32 {
    let diff = position.disc_count(Side::Black) as i32 - position.disc_count(Side::White) as i32;
    diff * TERMINAL_DISC_VALUE
}

/// True when neither side has a legal move (double pass).
#[inline]
pub fn is_terminal(position: &Position) -> bool {
    legal_moves_bitboard(position.black, position.white) == 0
        && legal_moves_bitboard(position.white, position.black) == 0
}

#[cfg(test)]
mod tests {
    use super::{evaluate, final_score, is_terminal, TERMINAL_DISC_VALUE};
    use crate::board::position::{Position, Side};

    #[test]
    fn opening_evaluation_is_symmetric_and_zero() {
        let pos = Position::start_pos();
        assert_eq!(evaluate(&pos, Side::Black), evaluate(&pos, Side::White));
        assert_eq!(evaluate(&pos, Side::Black), 0);
    }

    #[test]
    fn corner_occupancy_earns_weight_plus_bonus() {
        // Lone black disc on a1: positional weight 20 plus corner bonus 25.
        let pos = Position::from_masks(1, 0);
        assert_eq!(evaluate(&pos, Side::Black), 45);
        assert_eq!(evaluate(&pos, Side::White), -45);
    }

    #[test]
    fn terminal_extremes_and_neutral_split() {
        let full_black = Position::from_flat_fen(&"X".repeat(64)).expect("valid fen");
        assert_eq!(final_score(&full_black), 64 * TERMINAL_DISC_VALUE);
        assert!(is_terminal(&full_black));

        let full_white = Position::from_flat_fen(&"O".repeat(64)).expect("valid fen");
        assert_eq!(final_score(&full_white), -64 * TERMINAL_DISC_VALUE);
        assert!(is_terminal(&full_white));

        let even = format!("{}{}", "X".repeat(32), "O".repeat(32));
        let split = Position::from_flat_fen(&even).expect("valid fen");
        assert_eq!(final_score(&split), 0);
    }

    #[test]
    fn start_pos_is_not_terminal() {
        assert!(!is_terminal(&Position::start_pos()));
    }
}
