use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::slider_moves::{slide, ORTHOGONAL_DIRECTIONS};

pub fn rook_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    slide(piece, board, &ORTHOGONAL_DIRECTIONS)
}
