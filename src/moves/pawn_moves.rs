use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// The two forward-diagonal squares a pawn of `color` on `from` could capture on.
pub fn pawn_threat_targets(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_column| from.offset(forward, d_column))
}

/// Single step onto an empty square, double step from the starting row when
/// both squares are empty, diagonal step only onto an enemy piece.
pub fn pawn_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    let mut out = Vec::with_capacity(4);
    let color = piece.color();
    let from = piece.position();
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0).filter(|x| board.is_empty_at(*x)) {
        out.push(one);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(forward, 0).filter(|x| board.is_empty_at(*x)) {
                out.push(two);
            }
        }
    }

    for target in pawn_threat_targets(color, from) {
        if board
            .piece_at(target)
            .is_some_and(|occupant| occupant.color() != color)
        {
            out.push(target);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position as sq;
    use crate::utils::placement_parser::parse_placement;

    fn sorted(mut squares: Vec<Position>) -> Vec<Position> {
        squares.sort();
        squares
    }

    #[test]
    fn start_row_allows_double_step() {
        let board = Board::new_game();
        let pawn = board.piece_at(sq("e2").unwrap()).unwrap();
        assert_eq!(
            sorted(pawn_moves(pawn, &board)),
            sorted(vec![sq("e3").unwrap(), sq("e4").unwrap()])
        );

        let dark_pawn = board.piece_at(sq("d7").unwrap()).unwrap();
        assert_eq!(
            sorted(pawn_moves(dark_pawn, &board)),
            sorted(vec![sq("d6").unwrap(), sq("d5").unwrap()])
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // White pawn e2, black knight e3.
        let board = parse_placement("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        let pawn = board.piece_at(sq("e2").unwrap()).unwrap();
        assert!(pawn_moves(pawn, &board).is_empty());
    }

    #[test]
    fn diagonal_only_onto_enemy() {
        // White pawn d4, black pawn e5, white knight c5.
        let board = parse_placement("4k3/8/8/2N1p3/3P4/8/8/4K3").unwrap();
        let pawn = board.piece_at(sq("d4").unwrap()).unwrap();
        assert_eq!(
            sorted(pawn_moves(pawn, &board)),
            sorted(vec![sq("d5").unwrap(), sq("e5").unwrap()])
        );
    }

    #[test]
    fn threat_targets_stay_on_board() {
        let targets: Vec<Position> = pawn_threat_targets(Color::Light, sq("a2").unwrap()).collect();
        assert_eq!(targets, vec![sq("b3").unwrap()]);
    }
}
