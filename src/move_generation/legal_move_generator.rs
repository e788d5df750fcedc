//! Bit-parallel legal-move generation and flip computation.
//!
//! Both operations use a Kogge-Stone style occluded fill per compass
//! direction: seed with the source mask shifted one step under the
//! direction's wrap mask, then extend through opponent occupancy with three
//! doubling steps (run lengths 1, 2, 4, 8 — enough for any 8x8 run).
//! `reference_generator` holds the brute-force oracle these scans are tested
//! against.

use crate::board::position::{Position, Side};

/// Squares whose east-stepped source cannot have wrapped (column != a).
const NOT_FILE_A: u64 = 0xfefe_fefe_fefe_fefe;
/// Squares whose west-stepped source cannot have wrapped (column != h).
const NOT_FILE_H: u64 = 0x7f7f_7f7f_7f7f_7f7f;

#[derive(Debug, Clone, Copy)]
struct Ray {
    shift: u32,
    wrap_mask: u64,
    left: bool,
}

/// The 8 compass directions. `left` selects `<<` (south-ish, higher index)
/// over `>>`; `wrap_mask` keeps horizontal steps from wrapping across ranks.
const RAYS: [Ray; 8] = [
    // north
    Ray { shift: 8, wrap_mask: u64::MAX, left: false },
    // north-east
    Ray { shift: 7, wrap_mask: NOT_FILE_A, left: false },
    // east
    Ray { shift: 1, wrap_mask: NOT_FILE_A, left: true },
    // south-east
    Ray { shift: 9, wrap_mask: NOT_FILE_A, left: true },
    // south
    Ray { shift: 8, wrap_mask: u64::MAX, left: true },
    // south-west
    Ray { shift: 7, wrap_mask: NOT_FILE_H, left: true },
    // west
    Ray { shift: 1, wrap_mask: NOT_FILE_H, left: false },
    // north-west
    Ray { shift: 9, wrap_mask: NOT_FILE_H, left: false },
];

#[inline]
fn ray_shift(bb: u64, ray: Ray, steps: u32) -> u64 {
    let n = ray.shift * steps;
    if ray.left {
        bb << n
    } else {
        bb >> n
    }
}

/// Contiguous opponent run reachable from `gen` along `ray`.
///
/// The propagator is pre-masked with the wrap mask, so multi-step shifts
/// cannot smuggle bits across the board edge: a k-step extension only passes
/// through propagator squares that are themselves k squares clear of it.
#[inline]
fn occluded_fill(gen: u64, opp: u64, ray: Ray) -> u64 {
    let mut pro = opp & ray.wrap_mask;
    let mut flood = pro & ray_shift(gen, ray, 1);
    flood |= pro & ray_shift(flood, ray, 1);
    pro &= ray_shift(pro, ray, 1);
    flood |= pro & ray_shift(flood, ray, 2);
    pro &= ray_shift(pro, ray, 2);
    flood |= pro & ray_shift(flood, ray, 4);
    flood
}

/// Bitboard of every legal placement for the side owning `own`.
pub fn legal_moves_bitboard(own: u64, opp: u64) -> u64 {
    let empty = !(own | opp);
    let mut moves = 0u64;
    for ray in RAYS {
        let flood = occluded_fill(own, opp, ray);
        moves |= ray_shift(flood, ray, 1) & ray.wrap_mask;
    }
    moves & empty
}

/// Set of opponent discs flipped by placing a disc on `square`.
///
/// A run only flips when the square one step past its far end holds a
/// same-side disc; runs that hit the edge or an empty square contribute
/// nothing.
pub fn flips_for_move(own: u64, opp: u64, square: u8) -> u64 {
    let placed = 1u64 << square;
    let mut flips = 0u64;
    for ray in RAYS {
        let flood = occluded_fill(placed, opp, ray);
        if ray_shift(flood, ray, 1) & ray.wrap_mask & own != 0 {
            flips |= flood;
        }
    }
    flips
}

/// Legal move squares for `side`, ascending. An empty vector means `side`
/// must pass. Pure function of the position.
pub fn legal_moves(position: &Position, side: Side) -> Vec<u8> {
    let mut bb = legal_moves_bitboard(position.discs(side), position.discs(side.opposite()));
    let mut moves = Vec::with_capacity(bb.count_ones() as usize);
    while bb != 0 {
        moves.push(bb.trailing_zeros() as u8);
        bb &= bb - 1;
    }
    moves
}
