//! Terminal-friendly board rendering and square naming.

use crate::board::position::{Position, Side};

/// Algebraic name for a square index, `a1` for the top-left corner through
/// `h8` for the bottom-right.
pub fn square_name(square: u8) -> String {
    let col = (b'a' + square % 8) as char;
    let row = (b'1' + square / 8) as char;
    format!("{col}{row}")
}

/// Multi-line board diagram with file letters on top and rank digits on the
/// left, matching the square naming above.
pub fn render_position(position: &Position) -> String {
    let mut out = String::from("  a b c d e f g h\n");
    for row in 0..8u8 {
        out.push((b'1' + row) as char);
        for col in 0..8u8 {
            let bit = 1u64 << (row * 8 + col);
            out.push(' ');
            if position.black & bit != 0 {
                out.push(Side::Black.symbol());
            } else if position.white & bit != 0 {
                out.push(Side::White.symbol());
            } else {
                out.push('.');
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_position, square_name};
    use crate::board::position::Position;

    #[test]
    fn square_names_cover_the_corners() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(7), "h1");
        assert_eq!(square_name(56), "a8");
        assert_eq!(square_name(63), "h8");
        assert_eq!(square_name(19), "d3");
    }

    #[test]
    fn rendering_places_the_opening_discs() {
        let diagram = render_position(&Position::start_pos());
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "4 . . . O X . . .");
        assert_eq!(lines[5], "5 . . . X O . . .");
    }
}
