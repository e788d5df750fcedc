//! Negamax alpha-beta search over the bitboard position.
//!
//! Fail-soft negamax with transposition-table probing and bound tightening.
//! A side with no legal move passes: the recursion flips sides and negates
//! the window without consuming depth. Terminal positions (neither side can
//! move) score on the uniform terminal scale from `board_scoring`. The
//! function itself never fails; deadline handling lives entirely in the
//! iterative-deepening driver.

use crate::board::position::{Position, Side};
use crate::move_generation::legal_move_generator::legal_moves_bitboard;
use crate::search::board_scoring::{evaluate, final_score};
use crate::search::transposition_table::{Bound, PositionKey, TTEntry, TranspositionTable};

/// Window bound. Comfortably beyond any heuristic or terminal value.
pub const SCORE_INF: i32 = 1_000_000;

/// Per-search instrumentation, returned to the caller instead of living in
/// process-wide state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCounters {
    pub nodes: u64,
    pub tt_cutoffs: u64,
    pub beta_cutoffs: u64,
    /// Deepest ply observed; the driver uses this to detect tree exhaustion.
    pub max_ply: u8,
}

impl SearchCounters {
    #[inline]
    fn observe_ply(&mut self, ply: u8) {
        if ply > self.max_ply {
            self.max_ply = ply;
        }
    }

    pub fn merge(&mut self, other: &SearchCounters) {
        self.nodes += other.nodes;
        self.tt_cutoffs += other.tt_cutoffs;
        self.beta_cutoffs += other.beta_cutoffs;
        self.max_ply = self.max_ply.max(other.max_ply);
    }
}

/// Score of `position` from `side`'s point of view, searched to `depth`.
///
/// `ply` is the distance from the search root and only feeds the counters.
pub fn negamax(
    position: &mut Position,
    side: Side,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
    tt: &mut TranspositionTable,
    counters: &mut SearchCounters,
) -> i32 {
    counters.nodes += 1;
    counters.observe_ply(ply);

    let key = PositionKey::new(position, side);
    if let Some(entry) = tt.probe(key) {
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => {
                    counters.tt_cutoffs += 1;
                    return entry.score;
                }
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                counters.tt_cutoffs += 1;
                return entry.score;
            }
        }
    }

    let own = position.discs(side);
    let opp = position.discs(side.opposite());
    let own_moves = legal_moves_bitboard(own, opp);
    let opp_moves = legal_moves_bitboard(opp, own);
    let game_over = own_moves == 0 && opp_moves == 0;

    if depth == 0 || game_over {
        return if game_over {
            side.sign() * final_score(position)
        } else {
            evaluate(position, side)
        };
    }

    if own_moves == 0 {
        // Forced pass: opponent moves at the same depth.
        return -negamax(
            position,
            side.opposite(),
            depth,
            -beta,
            -alpha,
            ply + 1,
            tt,
            counters,
        );
    }

    let alpha_orig = alpha;
    let mut best = -SCORE_INF;
    let mut remaining = own_moves;
    while remaining != 0 {
        let square = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;

        position.apply_move(square, side);
        let score = -negamax(
            position,
            side.opposite(),
            depth - 1,
            -beta,
            -alpha,
            ply + 1,
            tt,
            counters,
        );
        position
            .undo()
            .expect("apply_move pushed a history entry just above");

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            counters.beta_cutoffs += 1;
            break;
        }
    }

    let bound = if best <= alpha_orig {
        Bound::Upper
    } else if best >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    tt.store(
        key,
        TTEntry {
            depth,
            bound,
            score: best,
        },
    );

    best
}

#[cfg(test)]
mod tests {
    use super::{negamax, SearchCounters, SCORE_INF};
    use crate::board::position::{Position, Side};
    use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_bitboard};
    use crate::search::board_scoring::{evaluate, final_score};
    use crate::search::transposition_table::TranspositionTable;
    use crate::utils::random_playout::random_reachable_position;
    use rand::{rngs::StdRng, SeedableRng};

    /// Plain minimax with the same leaf rules but no pruning and no table.
    fn reference_negamax(position: &mut Position, side: Side, depth: u8) -> i32 {
        let own = position.discs(side);
        let opp = position.discs(side.opposite());
        let own_moves = legal_moves_bitboard(own, opp);
        let opp_moves = legal_moves_bitboard(opp, own);
        let game_over = own_moves == 0 && opp_moves == 0;

        if depth == 0 || game_over {
            return if game_over {
                side.sign() * final_score(position)
            } else {
                evaluate(position, side)
            };
        }
        if own_moves == 0 {
            return -reference_negamax(position, side.opposite(), depth);
        }

        let mut best = -SCORE_INF;
        let mut remaining = own_moves;
        while remaining != 0 {
            let square = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;
            position.apply_move(square, side);
            let score = -reference_negamax(position, side.opposite(), depth - 1);
            position.undo().expect("history entry should exist");
            best = best.max(score);
        }
        best
    }

    fn search(position: &Position, side: Side, depth: u8) -> i32 {
        let mut pos = position.clone();
        let mut tt = TranspositionTable::new();
        let mut counters = SearchCounters::default();
        negamax(
            &mut pos, side, depth, -SCORE_INF, SCORE_INF, 0, &mut tt, &mut counters,
        )
    }

    #[test]
    fn depth_zero_returns_the_static_evaluation() {
        let pos = Position::start_pos();
        assert_eq!(search(&pos, Side::Black, 0), evaluate(&pos, Side::Black));
        assert_eq!(search(&pos, Side::White, 0), evaluate(&pos, Side::White));
    }

    #[test]
    fn terminal_position_scores_on_the_terminal_scale() {
        let full = Position::from_flat_fen(&"X".repeat(64)).expect("valid fen");
        assert_eq!(search(&full, Side::Black, 4), final_score(&full));
        assert_eq!(search(&full, Side::White, 4), -final_score(&full));
    }

    #[test]
    fn pruning_and_table_agree_with_plain_minimax() {
        let mut rng = StdRng::seed_from_u64(11);
        for case in 0..12 {
            let pos = random_reachable_position(&mut rng, 6 + case * 2);
            for side in [Side::Black, Side::White] {
                let mut scratch = pos.clone();
                let expected = reference_negamax(&mut scratch, side, 3);
                assert_eq!(
                    search(&pos, side, 3),
                    expected,
                    "case {case} side {side:?} fen {}",
                    pos.to_flat_fen()
                );
            }
        }
    }

    #[test]
    fn forced_pass_recurses_without_consuming_depth() {
        // Every square white except d4 (black) and c4 (empty). Black has no
        // move and must pass; white finishes the game by playing c4.
        let mut fen: Vec<char> = "O".repeat(64).chars().collect();
        fen[27] = 'X';
        fen[26] = '.';
        let fen: String = fen.into_iter().collect();
        let pos = Position::from_flat_fen(&fen).expect("valid fen");

        assert!(legal_moves(&pos, Side::Black).is_empty());
        assert_eq!(legal_moves(&pos, Side::White), vec![26]);

        // From black's POV the forced continuation loses every disc.
        let score = search(&pos, Side::Black, 1);
        assert_eq!(score, -6400);
    }

    #[test]
    fn search_leaves_the_position_untouched() {
        let pos = Position::start_pos();
        let mut scratch = pos.clone();
        let mut tt = TranspositionTable::new();
        let mut counters = SearchCounters::default();
        negamax(
            &mut scratch,
            Side::Black,
            4,
            -SCORE_INF,
            SCORE_INF,
            0,
            &mut tt,
            &mut counters,
        );
        assert_eq!(scratch, pos);
        assert!(counters.nodes > 0);
        assert!(counters.max_ply >= 4);
    }
}
