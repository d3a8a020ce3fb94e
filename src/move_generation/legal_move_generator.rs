//! Legal move enumeration.
//!
//! A move is legal when it is pseudo-legal for the piece, passes the
//! configured castling safety rule, and does not leave the mover's own king
//! attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::piece::{Piece, PieceMovement};
use crate::game_state::position::Position;
use crate::game_state::rules_config::{CastlingSafety, RulesConfig};
use crate::move_generation::legal_move_checks::{is_square_attacked, move_causes_check};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Position,
    pub to: Position,
}

/// Whether the piece on `from` may legally move to `to`.
pub fn is_legal_move(board: &mut Board, from: Position, to: Position, config: RulesConfig) -> bool {
    let Some(piece) = board.piece_at(from).copied() else {
        return false;
    };
    piece.can_move_to(board, to) && passes_safety_checks(board, &piece, to, config)
}

/// Legal destinations of the piece on `from`; empty when the square is empty.
pub fn legal_moves_for_piece(
    board: &mut Board,
    from: Position,
    config: RulesConfig,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(from).copied() else {
        return Vec::new();
    };
    piece
        .possible_moves(board)
        .into_iter()
        .filter(|&to| passes_safety_checks(board, &piece, to, config))
        .collect()
}

/// Every legal move for `color`, grouped by origin square in row-major order.
pub fn generate_legal_moves(
    board: &mut Board,
    color: Color,
    config: RulesConfig,
) -> Vec<LegalMove> {
    let origins = origins_of(board, color);
    let mut out = Vec::with_capacity(64);
    for from in origins {
        out.extend(
            legal_moves_for_piece(board, from, config)
                .into_iter()
                .map(|to| LegalMove { from, to }),
        );
    }
    out
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_any_legal_move(board: &mut Board, color: Color, config: RulesConfig) -> bool {
    for from in origins_of(board, color) {
        let Some(piece) = board.piece_at(from).copied() else {
            continue;
        };
        for to in piece.possible_moves(board) {
            if passes_safety_checks(board, &piece, to, config) {
                return true;
            }
        }
    }
    false
}

fn origins_of(board: &Board, color: Color) -> Vec<Position> {
    board.pieces_of(color).map(|piece| piece.position()).collect()
}

/// Checks applied on top of pseudo-legality. `to` must already be pseudo-legal.
fn passes_safety_checks(
    board: &mut Board,
    piece: &Piece,
    to: Position,
    config: RulesConfig,
) -> bool {
    if piece.is_castling_candidate(to)
        && config.castling_safety == CastlingSafety::FullPath
        && !castling_path_is_safe(board, piece, to, config)
    {
        return false;
    }
    !move_causes_check(board, piece.position(), to, config.pawn_threats)
}

/// The king is not in check and does not cross an attacked square. The
/// landing square is left to the self-check simulation.
fn castling_path_is_safe(board: &Board, king: &Piece, to: Position, config: RulesConfig) -> bool {
    let enemy = king.color().opposite();
    let from = king.position();
    let transit = from.with_column((from.column() + to.column()) / 2);
    !is_square_attacked(board, from, enemy, config.pawn_threats)
        && !is_square_attacked(board, transit, enemy, config.pawn_threats)
}
