//! Transposition table keyed by the raw mask pair plus side to move.
//!
//! Map-backed with a most-recent-wins replacement rule and no eviction:
//! searches are bounded by their wall-clock deadline, so unbounded growth
//! within one `best_move` call is accepted. Never shared across threads;
//! the parallel root split gives each worker its own private table.

use std::collections::HashMap;

use crate::board::position::{Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub black: u64,
    pub white: u64,
    pub to_move: Side,
}

impl PositionKey {
    #[inline]
    pub fn new(position: &Position, to_move: Side) -> Self {
        Self {
            black: position.black,
            white: position.white,
            to_move,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub depth: u8,
    pub bound: Bound,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, TTEntry>,
    stats: TTStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&mut self, key: PositionKey) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries.get(&key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Stores `entry`, unconditionally replacing any previous entry for the
    /// same key (the most recent search result wins).
    pub fn store(&mut self, key: PositionKey, entry: TTEntry) {
        self.stats.stores += 1;
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }
}
