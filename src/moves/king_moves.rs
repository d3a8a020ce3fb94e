use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_COLUMN;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::moves::slider_moves::can_land_on;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up to eight neighbouring squares of `from`, occupancy ignored.
pub fn king_step_targets(from: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_column)| from.offset(d_row, d_column))
}

pub fn king_moves(piece: &Piece, board: &Board) -> Vec<Position> {
    let mut out: Vec<Position> = king_step_targets(piece.position())
        .filter(|&target| can_land_on(piece, board, target))
        .collect();
    out.extend(castling_targets(piece, board));
    out
}

/// Two-column king moves from the king's home square toward an unmoved rook
/// of the same color in its corner, with every square strictly between them
/// empty. Attacks are not considered here.
pub fn castling_targets(king: &Piece, board: &Board) -> Vec<Position> {
    let mut out = Vec::with_capacity(2);
    let from = king.position();
    let on_home_square =
        from.row() == king.color().home_row() && from.column() == KING_HOME_COLUMN;
    if king.has_moved() || !on_home_square {
        return out;
    }

    for rook_column in [QUEENSIDE_ROOK_COLUMN, KINGSIDE_ROOK_COLUMN] {
        let rook_square = from.with_column(rook_column);
        let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
        });
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_column < from.column() {
            (rook_column, from.column())
        } else {
            (from.column(), rook_column)
        };
        let path_clear = (low + 1..high).all(|column| board.is_empty_at(from.with_column(column)));
        if !path_clear {
            continue;
        }

        let step = if rook_column > from.column() { 2 } else { -2 };
        if let Some(target) = from.offset(0, step) {
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

    #[test]
    fn no_castling_from_start_position() {
        let board = Board::new_game();
        let king = board.piece_at(sq("e1").unwrap()).unwrap();
        assert!(king_moves(king, &board).is_empty());
    }

    #[test]
    fn castling_targets_need_clear_path_and_unmoved_rook() {
        // Queenside path blocked by a knight on b1.
        let board = parse_placement("4k3/8/8/8/8/8/8/RN2K2R").unwrap();
        let king = board.piece_at(sq("e1").unwrap()).unwrap();
        assert_eq!(castling_targets(king, &board), vec![sq("g1").unwrap()]);

        let mut board = board;
        let mut rook = *board.piece_at(sq("h1").unwrap()).unwrap();
        rook.set_has_moved(true);
        board.place_piece(rook, sq("h1").unwrap());
        let king = board.piece_at(sq("e1").unwrap()).unwrap();
        assert!(castling_targets(king, &board).is_empty());
    }

    #[test]
    fn moved_king_cannot_castle() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let mut king = *board.piece_at(sq("e1").unwrap()).unwrap();
        king.set_has_moved(true);
        board.place_piece(king, sq("e1").unwrap());
        assert_eq!(king_moves(&king, &board).len(), 5);
    }

    #[test]
    fn king_off_its_home_square_cannot_castle() {
        // Unmoved king next to its rook: a two-column step would land on h1.
        let board = parse_placement("4k3/8/8/8/8/8/8/5K1R").unwrap();
        let king = board.piece_at(sq("f1").unwrap()).unwrap();
        assert!(castling_targets(king, &board).is_empty());
        assert!(!king_moves(king, &board).contains(&sq("h1").unwrap()));

        // Unmoved king and rook sharing a middle rank.
        let board = parse_placement("4k3/8/8/8/4K2R/8/8/8").unwrap();
        let king = board.piece_at(sq("e4").unwrap()).unwrap();
        assert!(castling_targets(king, &board).is_empty());

        // Dark king on the light back rank.
        let board = parse_placement("8/8/8/8/8/8/8/r3k2K").unwrap();
        let king = board.piece_at(sq("e1").unwrap()).unwrap();
        assert!(castling_targets(king, &board).is_empty());
    }

    #[test]
    fn enemy_rook_is_not_a_castling_partner() {
        let board = parse_placement("4k3/8/8/8/8/8/8/r3K2R").unwrap();
        let king = board.piece_at(sq("e1").unwrap()).unwrap();
        assert_eq!(castling_targets(king, &board), vec![sq("g1").unwrap()]);
    }
}
