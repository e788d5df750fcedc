//! Brute-force move generation oracle.
//!
//! Walks every empty square in all 8 directions, one square at a time. Far
//! too slow for search, but obviously correct; the bit-parallel generator is
//! tested for set equality against it.

use crate::board::position::{Position, Side};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Discs flipped by placing `side`'s disc on `square`, found by scanning.
pub fn reference_flips(position: &Position, square: u8, side: Side) -> u64 {
    let own = position.discs(side);
    let opp = position.discs(side.opposite());
    let row = i32::from(square / 8);
    let col = i32::from(square % 8);

    let mut flips = 0u64;
    for (dr, dc) in DIRECTIONS {
        let mut line = 0u64;
        let mut r = row + dr;
        let mut c = col + dc;
        while (0..8).contains(&r) && (0..8).contains(&c) {
            let bit = 1u64 << (r * 8 + c);
            if opp & bit != 0 {
                line |= bit;
                r += dr;
                c += dc;
                continue;
            }
            if own & bit != 0 && line != 0 {
                flips |= line;
            }
            break;
        }
    }
    flips
}

/// Legal move squares for `side`, ascending, by per-square scanning.
pub fn reference_legal_moves(position: &Position, side: Side) -> Vec<u8> {
    let occupied = position.occupied();
    let mut moves = Vec::new();
    for square in 0..64u8 {
        if occupied & (1u64 << square) != 0 {
            continue;
        }
        if reference_flips(position, square, side) != 0 {
            moves.push(square);
        }
    }
    moves
}
