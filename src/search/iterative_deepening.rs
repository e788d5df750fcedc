//! Iterative deepening driver with aspiration windows.
//!
//! Deepens one ply at a time until the wall-clock deadline, keeping the best
//! move of the last fully completed iteration. From depth 2 onward each
//! iteration opens a narrow window around the previous score; a score
//! landing on or outside the window edge discards the iteration and
//! re-searches the same depth with a full window. Root moves are ordered
//! with the previous iteration's best move first. Shallow iterations run
//! serially; deeper ones split the root across threads.

use std::time::{Duration, Instant};

use crate::board::position::{Position, Side};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::evaluate;
use crate::search::negamax::{negamax, SearchCounters, SCORE_INF};
use crate::search::threading::search_root_parallel;
use crate::search::transposition_table::{TTStats, TranspositionTable};

/// Half-width of the aspiration window around the previous iteration score.
pub const ASPIRATION_WINDOW: i32 = 50;
/// Iterations at this depth or deeper split the root across worker threads.
pub const PARALLEL_DEPTH_MIN: u8 = 5;

/// Aggregated instrumentation across every iteration of one search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_probes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
    pub beta_cutoffs: u64,
    pub workers_timed_out: u64,
}

impl SearchStats {
    fn absorb_counters(&mut self, counters: &SearchCounters) {
        self.nodes += counters.nodes;
        self.tt_cutoffs += counters.tt_cutoffs;
        self.beta_cutoffs += counters.beta_cutoffs;
    }

    fn absorb_tt(&mut self, stats: TTStats) {
        self.tt_probes += stats.probes;
        self.tt_hits += stats.hits;
    }
}

/// Final answer of one `best_move` call.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<u8>,
    /// Score of `best_move` from the searching side's point of view.
    pub score: i32,
    /// Deepest fully completed iteration (0 when none finished in time).
    pub reached_depth: u8,
    pub stats: SearchStats,
}

enum RootOutcome {
    /// Every root move searched; `max_ply` is the deepest ply any line hit.
    Completed { square: u8, score: i32, max_ply: u8 },
    /// Serial root loop hit the deadline mid-iteration.
    Truncated,
    /// Parallel root split lost workers to the deadline. `best` is the best
    /// completed move, if any worker finished.
    TimedOut { best: Option<(u8, i32)>, max_ply: u8 },
}

fn pv_ordered(root_moves: &[u8], pv: Option<u8>) -> Vec<u8> {
    let mut ordered = Vec::with_capacity(root_moves.len());
    if let Some(best) = pv {
        if root_moves.contains(&best) {
            ordered.push(best);
        }
    }
    ordered.extend(root_moves.iter().copied().filter(|&m| Some(m) != pv));
    ordered
}

fn search_root_serial(
    position: &Position,
    side: Side,
    root_moves: &[u8],
    depth: u8,
    alpha0: i32,
    beta0: i32,
    deadline: Instant,
    tt: &mut TranspositionTable,
    stats: &mut SearchStats,
) -> RootOutcome {
    let mut alpha = alpha0;
    let mut best: Option<(u8, i32)> = None;
    let mut max_ply = 0u8;

    for &square in root_moves {
        if Instant::now() >= deadline {
            return RootOutcome::Truncated;
        }
        let mut child = position.clone();
        child.apply_move(square, side);
        let mut counters = SearchCounters::default();
        let score = -negamax(
            &mut child,
            side.opposite(),
            depth - 1,
            -beta0,
            -alpha,
            1,
            tt,
            &mut counters,
        );
        stats.absorb_counters(&counters);
        max_ply = max_ply.max(counters.max_ply);

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((square, score));
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta0 {
            break;
        }
    }

    let (square, score) = best.expect("root_moves is non-empty");
    RootOutcome::Completed { square, score, max_ply }
}

#[allow(clippy::too_many_arguments)]
fn run_root(
    position: &Position,
    side: Side,
    root_moves: &[u8],
    depth: u8,
    alpha: i32,
    beta: i32,
    deadline: Instant,
    tt: &mut TranspositionTable,
    stats: &mut SearchStats,
) -> RootOutcome {
    if depth < PARALLEL_DEPTH_MIN {
        return search_root_serial(
            position, side, root_moves, depth, alpha, beta, deadline, tt, stats,
        );
    }

    let outcome = search_root_parallel(position, side, root_moves, depth, alpha, beta, deadline);
    let mut best: Option<(u8, i32)> = None;
    let mut max_ply = 0u8;
    for result in &outcome.results {
        stats.absorb_counters(&result.counters);
        stats.absorb_tt(result.tt_stats);
        max_ply = max_ply.max(result.counters.max_ply);
        if best.map_or(true, |(_, s)| result.score > s) {
            best = Some((result.square, result.score));
        }
    }
    stats.workers_timed_out += outcome.timed_out as u64;

    if outcome.timed_out > 0 {
        return RootOutcome::TimedOut { best, max_ply };
    }
    let (square, score) = best.expect("no timeouts means every worker reported");
    RootOutcome::Completed { square, score, max_ply }
}

/// Picks the best move for `side` within `time_limit` of wall-clock time.
///
/// Returns the best move of the deepest fully completed iteration; an
/// iteration cut off by the deadline never overwrites an earlier answer,
/// except that a timed-out parallel iteration may adopt its best finished
/// move when its score landed strictly inside the aspiration window. A
/// budget too small for even one iteration yields the first legal move, so
/// the answer is `None` only when the side to move has none.
pub fn best_move(position: &Position, side: Side, time_limit: Duration) -> SearchOutcome {
    let deadline = Instant::now() + time_limit;
    let mut stats = SearchStats::default();
    let mut tt = TranspositionTable::new();

    let root_moves = legal_moves(position, side);
    if root_moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: 0,
            reached_depth: 0,
            stats,
        };
    }

    // Seed with the first legal move so a deadline hit before the first
    // iteration completes still answers with a legal move.
    let mut best_square = Some(root_moves[0]);
    let mut best_score = evaluate(position, side);
    let mut reached_depth = 0u8;
    let mut depth = 1u8;

    loop {
        if Instant::now() >= deadline {
            break;
        }
        let ordered = pv_ordered(&root_moves, best_square);

        let (mut alpha, mut beta) = if depth >= 2 {
            (best_score - ASPIRATION_WINDOW, best_score + ASPIRATION_WINDOW)
        } else {
            (-SCORE_INF, SCORE_INF)
        };

        let mut outcome = run_root(
            position, side, &ordered, depth, alpha, beta, deadline, &mut tt, &mut stats,
        );

        // Aspiration miss: discard and re-search the same depth full-width.
        if let RootOutcome::Completed { score, .. } = outcome {
            if depth >= 2 && (score <= alpha || score >= beta) {
                alpha = -SCORE_INF;
                beta = SCORE_INF;
                outcome = run_root(
                    position, side, &ordered, depth, alpha, beta, deadline, &mut tt, &mut stats,
                );
            }
        }

        match outcome {
            RootOutcome::Completed { square, score, max_ply } => {
                best_square = Some(square);
                best_score = score;
                reached_depth = depth;
                // Every line bottomed out before the depth budget: the tree
                // is exhausted and deeper iterations cannot differ.
                if max_ply < depth {
                    break;
                }
            }
            RootOutcome::Truncated => break,
            RootOutcome::TimedOut { best, .. } => {
                if let Some((square, score)) = best {
                    // A window-edge score would have forced a re-search had
                    // the iteration completed, so it cannot be trusted.
                    if score > alpha && score < beta {
                        best_square = Some(square);
                        best_score = score;
                        reached_depth = depth;
                    }
                }
                break;
            }
        }

        depth = depth.saturating_add(1);
    }

    stats.absorb_tt(tt.stats());
    SearchOutcome {
        best_move: best_square,
        score: best_score,
        reached_depth,
        stats,
    }
}
