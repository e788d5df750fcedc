//! Parallel root split.
//!
//! One OS thread per root move, each searching its own cloned position with
//! a private transposition table, results collected over a channel until the
//! deadline. Workers that outlive the deadline are abandoned (their threads
//! finish in the background and their send fails harmlessly); the caller
//! only sees the moves that completed in time.

use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crate::board::position::{Position, Side};
use crate::search::negamax::{negamax, SearchCounters};
use crate::search::transposition_table::{TTStats, TranspositionTable};

/// Result of one fully-searched root move.
#[derive(Debug, Clone, Copy)]
pub struct RootWorkerResult {
    pub square: u8,
    pub score: i32,
    pub counters: SearchCounters,
    pub tt_stats: TTStats,
}

#[derive(Debug)]
pub struct ParallelRootOutcome {
    /// Completed root moves in arrival order.
    pub results: Vec<RootWorkerResult>,
    /// Workers abandoned at the deadline.
    pub timed_out: usize,
}

/// Searches every move in `root_moves` to `depth` in parallel under the
/// shared window `(alpha, beta)`.
///
/// Each worker scores its move as `-negamax(child, …)` from the opponent's
/// reply position, so the returned scores are directly comparable from
/// `side`'s point of view. Collection stops at `deadline`; late workers are
/// counted, not waited for.
pub fn search_root_parallel(
    position: &Position,
    side: Side,
    root_moves: &[u8],
    depth: u8,
    alpha: i32,
    beta: i32,
    deadline: Instant,
) -> ParallelRootOutcome {
    let (tx, rx) = mpsc::channel::<RootWorkerResult>();

    for &square in root_moves {
        let tx = tx.clone();
        let mut child = position.clone();
        thread::spawn(move || {
            child.apply_move(square, side);
            let mut tt = TranspositionTable::new();
            let mut counters = SearchCounters::default();
            let score = -negamax(
                &mut child,
                side.opposite(),
                depth - 1,
                -beta,
                -alpha,
                1,
                &mut tt,
                &mut counters,
            );
            // Receiver may be gone after a timeout; that is fine.
            let _ = tx.send(RootWorkerResult {
                square,
                score,
                counters,
                tt_stats: tt.stats(),
            });
        });
    }
    drop(tx);

    let mut results = Vec::with_capacity(root_moves.len());
    for _ in 0..root_moves.len() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(result) => results.push(result),
            Err(_) => break,
        }
    }

    let timed_out = root_moves.len() - results.len();
    ParallelRootOutcome { results, timed_out }
}
