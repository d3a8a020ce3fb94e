//! Ray walking shared by the sliding pieces, plus the common landing rule.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A piece may land on an empty square or on an enemy-occupied one.
#[inline]
pub fn can_land_on(piece: &Piece, board: &Board, target: Position) -> bool {
    board
        .piece_at(target)
        .map_or(true, |occupant| occupant.color() != piece.color())
}

/// Walk each direction until the edge or the first occupied square. The
/// occupied square is included when it holds an enemy piece.
pub fn slide(piece: &Piece, board: &Board, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    for &(d_row, d_column) in directions {
        let mut cursor = piece.position().offset(d_row, d_column);
        while let Some(target) = cursor {
            match board.piece_at(target) {
                None => out.push(target),
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        out.push(target);
                    }
                    break;
                }
            }
            cursor = target.offset(d_row, d_column);
        }
    }
    out
}
