use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::slider_moves::{slide, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    slide(piece, board, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_position as sq;

    #[test]
    fn boxed_in_at_start() {
        let board = Board::new_game();
        let bishop = board.piece_at(sq("c1").unwrap()).unwrap();
        assert!(bishop_moves(bishop, &board).is_empty());
    }
}
