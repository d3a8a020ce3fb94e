//! Attack detection and the self-check simulation.

use log::warn;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::PieceMovement;
use crate::game_state::position::Position;
use crate::game_state::rules_config::PawnThreats;
use crate::game_state::undo_state::SimulatedMove;

/// Whether any piece of `attacker_color`, other than one standing on `square`
/// itself, threatens `square`.
pub fn is_square_attacked(
    board: &Board,
    square: Position,
    attacker_color: Color,
    pawn_threats: PawnThreats,
) -> bool {
    board
        .pieces_of(attacker_color)
        .filter(|piece| piece.position() != square)
        .any(|piece| piece.threatens(board, square, pawn_threats))
}

/// Whether `color`'s king is attacked. A missing king counts as attacked.
pub fn is_king_in_check(board: &Board, color: Color, pawn_threats: PawnThreats) -> bool {
    match board.find_king(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite(), pawn_threats),
        None => {
            warn!("no {color} king on the board; treating it as in check");
            true
        }
    }
}

/// Whether moving the piece on `from` to `destination` would leave its own
/// king attacked. Castling's rook relocation is not simulated.
///
/// The board is borrowed mutably for the trial and is identical to its prior
/// state when this returns. An empty `from` square reports `true`.
pub fn move_causes_check(
    board: &mut Board,
    from: Position,
    destination: Position,
    pawn_threats: PawnThreats,
) -> bool {
    let Some(trial) = SimulatedMove::begin(board, from, destination) else {
        return true;
    };
    let color = trial.mover().color();
    is_king_in_check(trial.board(), color, pawn_threats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position as sq;
    use crate::utils::placement_parser::parse_placement;

    #[test]
    fn start_position_has_no_checks() {
        let board = Board::new_game();
        assert!(!is_king_in_check(&board, Color::Light, PawnThreats::Diagonals));
        assert!(!is_king_in_check(&board, Color::Dark, PawnThreats::Diagonals));
        assert!(is_square_attacked(
            &board,
            sq("f3").unwrap(),
            Color::Light,
            PawnThreats::Diagonals
        ));
        assert!(!is_square_attacked(
            &board,
            sq("e4").unwrap(),
            Color::Light,
            PawnThreats::Diagonals
        ));
    }

    #[test]
    fn pinned_piece_may_not_leave_the_line() {
        // White king e1, white bishop e2, black rook e8.
        let mut board = parse_placement("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        let before = board.clone();

        assert!(move_causes_check(
            &mut board,
            sq("e2").unwrap(),
            sq("d3").unwrap(),
            PawnThreats::Diagonals
        ));
        assert_eq!(board, before);

        assert!(!move_causes_check(
            &mut board,
            sq("e1").unwrap(),
            sq("d1").unwrap(),
            PawnThreats::Diagonals
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn capturing_the_checker_resolves_check() {
        // White king e1 checked by black queen e2, defended by nothing.
        let mut board = parse_placement("7k/8/8/8/8/8/4q3/4K3").unwrap();
        let before = board.clone();
        assert!(is_king_in_check(&board, Color::Light, PawnThreats::Diagonals));
        assert!(!move_causes_check(
            &mut board,
            sq("e1").unwrap(),
            sq("e2").unwrap(),
            PawnThreats::Diagonals
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn missing_king_is_reported_as_check() {
        let mut board = parse_placement("7k/8/8/8/8/8/4P3/8").unwrap();
        let before = board.clone();
        assert!(move_causes_check(
            &mut board,
            sq("e2").unwrap(),
            sq("e3").unwrap(),
            PawnThreats::Diagonals
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn every_trial_move_leaves_the_board_untouched() {
        let mut board =
            parse_placement("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R").unwrap();
        let before = board.clone();

        let origins: Vec<Position> = Position::all().filter(|&x| !board.is_empty_at(x)).collect();
        for from in origins {
            for destination in Position::all() {
                for pawn_threats in [PawnThreats::Diagonals, PawnThreats::CaptureMovesOnly] {
                    move_causes_check(&mut board, from, destination, pawn_threats);
                    assert_eq!(board, before, "trial {from} -> {destination} changed the board");
                }
            }
        }
    }

    #[test]
    fn empty_diagonal_threat_depends_on_pawn_semantics() {
        // Black pawn e3 eyes the empty d2 and f2 squares.
        let board = parse_placement("7k/8/8/8/8/4p3/8/4K3").unwrap();
        assert!(is_square_attacked(
            &board,
            sq("d2").unwrap(),
            Color::Dark,
            PawnThreats::Diagonals
        ));
        assert!(!is_square_attacked(
            &board,
            sq("d2").unwrap(),
            Color::Dark,
            PawnThreats::CaptureMovesOnly
        ));
    }

    #[test]
    fn king_may_not_step_onto_a_pawn_guarded_square() {
        // Once the king stands on d2 the pawn could capture it, so both
        // semantics agree.
        let mut board = parse_placement("7k/8/8/8/8/4p3/8/4K3").unwrap();
        for pawn_threats in [PawnThreats::Diagonals, PawnThreats::CaptureMovesOnly] {
            assert!(move_causes_check(
                &mut board,
                sq("e1").unwrap(),
                sq("d2").unwrap(),
                pawn_threats
            ));
        }
    }
}
