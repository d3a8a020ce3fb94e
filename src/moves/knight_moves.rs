use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::slider_moves::can_land_on;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight L-shaped jumps; intervening squares are ignored.
pub fn knight_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_column)| piece.position().offset(d_row, d_column))
        .filter(|&target| can_land_on(piece, board, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_position as sq;

    #[test]
    fn jumps_over_the_pawn_wall() {
        let board = Board::new_game();
        let knight = board.piece_at(sq("g1").unwrap()).unwrap();
        let mut moves = knight_moves(knight, &board);
        moves.sort();
        let mut expected = vec![sq("f3").unwrap(), sq("h3").unwrap()];
        expected.sort();
        assert_eq!(moves, expected);
    }
}
