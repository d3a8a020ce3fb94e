use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::slider_moves::{slide, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn queen_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    let mut out = slide(piece, board, &ORTHOGONAL_DIRECTIONS);
    out.extend(slide(piece, board, &DIAGONAL_DIRECTIONS));
    out
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::utils::algebraic::algebraic_to_position as sq;
    use crate::utils::placement_parser::parse_placement;

    #[test]
    fn open_board_centre_reaches_twenty_seven_squares() {
        let board = parse_placement("k7/8/8/8/3Q4/8/8/7K").unwrap();
        let queen = board.piece_at(sq("d4").unwrap()).unwrap();
        assert_eq!(queen_moves(queen, &board).len(), 27);
    }
}
