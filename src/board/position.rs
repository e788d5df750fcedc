//! Core bitboard position representation.
//!
//! `Position` is the central model for the engine. It stores one 64-bit
//! occupancy mask per side (bit i = square i, row-major from the top-left
//! corner) and the undo stack used by make/unmake style search workflows.
//! The side to move is not part of the position; callers thread a `Side`
//! token through every operation that needs one.

use crate::errors::EngineError;
use crate::move_generation::legal_move_generator::{flips_for_move, legal_moves_bitboard};
use crate::utils::flat_fen_generator::generate_flat_fen;
use crate::utils::flat_fen_parser::parse_flat_fen;

/// Disc color. `Black` is side A (`X`), `White` is side B (`O`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Score sign for this side: +1 for black, -1 for white. Used to turn
    /// black-POV terminal scores into side-to-move-POV negamax values.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

/// Bitboard position with an owned undo stack.
///
/// Invariant: `black & white == 0` for every position built through the
/// public constructors and mutated only through `apply_move`/`undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub black: u64,
    pub white: u64,
    history: Vec<(u64, u64)>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            black: 0,
            white: 0,
            history: Vec::new(),
        }
    }
}

impl Position {
    /// Builds a position directly from the two occupancy masks.
    #[inline]
    pub fn from_masks(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "sides may not share a square");
        Self {
            black,
            white,
            history: Vec::new(),
        }
    }

    /// Standard starting layout: black on e4/d5, white on d4/e5.
    #[inline]
    pub fn start_pos() -> Self {
        Self::from_masks((1 << 28) | (1 << 35), (1 << 27) | (1 << 36))
    }

    /// Parses a 64-character flat-FEN string (row-major, top row first).
    #[inline]
    pub fn from_flat_fen(fen: &str) -> Result<Self, EngineError> {
        parse_flat_fen(fen)
    }

    /// Serializes the position to its 64-character flat-FEN string.
    #[inline]
    pub fn to_flat_fen(&self) -> String {
        generate_flat_fen(self)
    }

    #[inline]
    pub fn discs(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    pub fn disc_count(&self, side: Side) -> u32 {
        self.discs(side).count_ones()
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }

    #[inline]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Places `side`'s disc on `square` and flips every bracketed opponent
    /// run. Unchecked fast path: the caller must only pass squares obtained
    /// from the move generator. The pre-move masks are pushed for `undo`.
    pub fn apply_move(&mut self, square: u8, side: Side) {
        self.history.push((self.black, self.white));

        let placed = 1u64 << square;
        let flips = flips_for_move(self.discs(side), self.discs(side.opposite()), square);
        match side {
            Side::Black => {
                self.black |= placed | flips;
                self.white &= !flips;
            }
            Side::White => {
                self.white |= placed | flips;
                self.black &= !flips;
            }
        }
    }

    /// Strict variant of `apply_move` that validates the square against the
    /// generator before mutating anything.
    pub fn apply_move_checked(&mut self, square: u8, side: Side) -> Result<(), EngineError> {
        let legal = legal_moves_bitboard(self.discs(side), self.discs(side.opposite()));
        if square >= 64 || legal & (1u64 << square) == 0 {
            return Err(EngineError::IllegalMoveUse(square));
        }
        self.apply_move(square, side);
        Ok(())
    }

    /// Restores the most recently pushed mask pair (strict LIFO).
    pub fn undo(&mut self) -> Result<(), EngineError> {
        let (black, white) = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.black = black;
        self.white = white;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Side};
    use crate::errors::EngineError;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::random_playout::random_reachable_position;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn start_pos_has_two_discs_per_side() {
        let pos = Position::start_pos();
        assert_eq!(pos.disc_count(Side::Black), 2);
        assert_eq!(pos.disc_count(Side::White), 2);
        assert_eq!(pos.black & pos.white, 0);
    }

    #[test]
    fn apply_then_undo_restores_masks_bit_for_bit() {
        let mut pos = Position::start_pos();
        let before = pos.clone();
        for mv in legal_moves(&pos, Side::Black) {
            pos.apply_move(mv, Side::Black);
            pos.undo().expect("history entry should exist");
            assert_eq!(pos, before);
        }
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let mut pos = Position::start_pos();
        assert_eq!(pos.undo(), Err(EngineError::EmptyHistory));
    }

    #[test]
    fn undo_pops_in_lifo_order() {
        let mut pos = Position::start_pos();
        let start = pos.clone();
        pos.apply_move(19, Side::Black);
        let after_first = (pos.black, pos.white);
        let reply = legal_moves(&pos, Side::White)[0];
        pos.apply_move(reply, Side::White);
        assert_eq!(pos.history_depth(), 2);

        pos.undo().expect("second entry should pop");
        assert_eq!((pos.black, pos.white), after_first);
        pos.undo().expect("first entry should pop");
        assert_eq!(pos, start);
    }

    #[test]
    fn apply_move_flips_the_bracketed_run() {
        let mut pos = Position::start_pos();
        // d3 for black flips d4: black gains the placed disc plus one flip.
        pos.apply_move(19, Side::Black);
        assert_eq!(pos.disc_count(Side::Black), 4);
        assert_eq!(pos.disc_count(Side::White), 1);
        assert_eq!(pos.black & pos.white, 0);
    }

    #[test]
    fn apply_move_checked_rejects_illegal_squares() {
        let mut pos = Position::start_pos();
        assert_eq!(
            pos.apply_move_checked(0, Side::Black),
            Err(EngineError::IllegalMoveUse(0))
        );
        assert_eq!(pos.history_depth(), 0);
        pos.apply_move_checked(19, Side::Black)
            .expect("d3 is legal for black at the start");
    }

    #[test]
    fn masks_never_overlap_along_random_playouts() {
        let mut rng = StdRng::seed_from_u64(7);
        for plies in [4usize, 10, 20, 40] {
            let pos = random_reachable_position(&mut rng, plies);
            assert_eq!(pos.black & pos.white, 0, "after {plies} plies");
        }
    }
}
