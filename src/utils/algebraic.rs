//! Square-name conversions (`e4` and friends).
//!
//! File `a` is column 0 and rank 8 is row 0, matching the board's
//! row-major layout with Black at the top.

use crate::chess_errors::ChessErrors;
use crate::game_state::position::Position;

/// Convert a square name (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Position::new(b'8' - rank, file - b'a')
}

/// Convert a position to its square name (for example: "e4").
pub fn position_to_algebraic(position: Position) -> String {
    let file_char = char::from(b'a' + position.column());
    let rank_char = char::from(b'8' - position.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::position::Position;

    #[test]
    fn corner_and_centre_squares() {
        let a8 = algebraic_to_position("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.column()), (0, 0));
        let h1 = algebraic_to_position("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.column()), (7, 7));
        let e2 = algebraic_to_position("E2").expect("upper-case file should parse");
        assert_eq!((e2.row(), e2.column()), (6, 4));

        let d5 = Position::new(3, 3).expect("d5 is on the board");
        assert_eq!(position_to_algebraic(d5), "d5");
        assert_eq!(d5.to_string(), "d5");
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert!(algebraic_to_position(bad).is_err(), "{bad:?} should not parse");
        }
    }
}
