//! Flat-FEN serialization, the inverse of `flat_fen_parser`.

use crate::board::position::{Position, Side};

/// Renders the position as a 64-character flat FEN (`X`/`O`/`.`).
pub fn generate_flat_fen(position: &Position) -> String {
    let mut fen = String::with_capacity(64);
    for square in 0..64u8 {
        let bit = 1u64 << square;
        if position.black & bit != 0 {
            fen.push(Side::Black.symbol());
        } else if position.white & bit != 0 {
            fen.push(Side::White.symbol());
        } else {
            fen.push('.');
        }
    }
    fen
}
