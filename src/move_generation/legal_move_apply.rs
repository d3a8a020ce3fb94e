//! Board mutation for a committed move.
//!
//! `apply_move` performs no validation. Callers decide legality first and
//! then hand the move over; the board is updated in place, including the
//! castling rook relocation and pawn promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COLUMN, QUEENSIDE_ROOK_COLUMN};
use crate::game_state::chess_types::PromotionChoice;
use crate::game_state::piece::{Piece, PieceMovement};
use crate::game_state::position::Position;

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The mover as it stood before the move.
    pub mover: Piece,
    pub to: Position,
    pub captured: Option<Piece>,
    /// Rook origin and destination when the move was castling.
    pub castled_rook: Option<(Position, Position)>,
    pub promoted_to: Option<PromotionChoice>,
}

/// Move the piece on `from` to `to`. Returns `None` when `from` is empty.
///
/// A king moving two columns also moves the rook from the corner it moved
/// toward to the square the king passed over. A pawn reaching its far rank
/// is replaced by a new, unmoved piece of `promotion` (Queen when `None`).
pub fn apply_move(
    board: &mut Board,
    from: Position,
    to: Position,
    promotion: Option<PromotionChoice>,
) -> Option<AppliedMove> {
    let mover = *board.piece_at(from)?;

    let castled_rook = if mover.is_castling_candidate(to) {
        relocate_castling_rook(board, from, to)
    } else {
        None
    };

    let captured = board.piece_at(to).copied();
    board.remove_piece(from);
    let mut moved = mover;
    moved.set_has_moved(true);
    board.place_piece(moved, to);

    let promoted_to = if mover.is_promotion_candidate(to) {
        let choice = promotion.unwrap_or_default();
        board.remove_piece(to);
        board.place_piece(Piece::new(choice.piece_kind(), mover.color(), to), to);
        Some(choice)
    } else {
        None
    };

    Some(AppliedMove {
        mover,
        to,
        captured,
        castled_rook,
        promoted_to,
    })
}

fn relocate_castling_rook(
    board: &mut Board,
    king_from: Position,
    king_to: Position,
) -> Option<(Position, Position)> {
    let (rook_column, rook_to_column) = if king_to.column() > king_from.column() {
        (KINGSIDE_ROOK_COLUMN, king_from.column() + 1)
    } else {
        (QUEENSIDE_ROOK_COLUMN, king_from.column().checked_sub(1)?)
    };
    let rook_from = king_from.with_column(rook_column);
    let rook_to = king_from.with_column(rook_to_column);

    let mut rook = *board.piece_at(rook_from)?;
    board.remove_piece(rook_from);
    rook.set_has_moved(true);
    board.place_piece(rook, rook_to);
    Some((rook_from, rook_to))
}
