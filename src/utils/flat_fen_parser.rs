//! Flat-FEN parsing.
//!
//! A flat FEN is a 64-character string, row-major from the top-left square:
//! `X` black, `O` white, anything else empty. Only the length is validated;
//! unknown characters are treated as empty squares.

use crate::board::position::Position;
use crate::errors::EngineError;

pub fn parse_flat_fen(fen: &str) -> Result<Position, EngineError> {
    let len = fen.chars().count();
    if len != 64 {
        return Err(EngineError::FormatError(len));
    }

    let mut black = 0u64;
    let mut white = 0u64;
    for (square, ch) in fen.chars().enumerate() {
        match ch {
            'X' => black |= 1u64 << square,
            'O' => white |= 1u64 << square,
            _ => {}
        }
    }
    Ok(Position::from_masks(black, white))
}
