//! Chess piece values and their movement capability.
//!
//! A `Piece` is a small `Copy` value carrying its kind tag, color, "has moved"
//! flag and the square it currently stands on. The `Board` keeps that square
//! in sync on every placement. Movement rules dispatch on the kind tag into
//! the per-variant generators under `crate::moves`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::rules_config::PawnThreats;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::{king_moves, king_step_targets};
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::{pawn_moves, pawn_threat_targets};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
    position: Position,
}

impl Piece {
    /// A fresh, unmoved piece. `position` is overwritten when the piece is placed.
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
            position,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn set_has_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// Pseudo-legal movement capability shared by every piece variant.
///
/// None of these methods mutate the board, and none of them consider whether
/// a move would leave the mover's own king attacked.
pub trait PieceMovement {
    /// Every pseudo-legal destination from the piece's current square.
    fn possible_moves(&self, board: &Board) -> Vec<Position>;

    /// Whether `destination` is pseudo-legal for this piece.
    fn can_move_to(&self, board: &Board, destination: Position) -> bool {
        self.possible_moves(board).contains(&destination)
    }

    /// A king moving two columns along its row: the castling geometry.
    fn is_castling_candidate(&self, destination: Position) -> bool;

    /// A pawn landing on its far rank.
    fn is_promotion_candidate(&self, destination: Position) -> bool;

    /// Whether this piece attacks `square` for the purposes of check detection.
    fn threatens(&self, board: &Board, square: Position, pawn_threats: PawnThreats) -> bool;
}

impl PieceMovement for Piece {
    fn possible_moves(&self, board: &Board) -> Vec<Position> {
        match self.kind {
            PieceKind::Pawn => pawn_moves(self, board),
            PieceKind::Knight => knight_moves(self, board),
            PieceKind::Bishop => bishop_moves(self, board),
            PieceKind::Rook => rook_moves(self, board),
            PieceKind::Queen => queen_moves(self, board),
            PieceKind::King => king_moves(self, board),
        }
    }

    fn is_castling_candidate(&self, destination: Position) -> bool {
        self.kind == PieceKind::King
            && destination.row() == self.position.row()
            && destination.column().abs_diff(self.position.column()) == 2
    }

    fn is_promotion_candidate(&self, destination: Position) -> bool {
        self.kind == PieceKind::Pawn && destination.row() == self.color.promotion_row()
    }

    fn threatens(&self, board: &Board, square: Position, pawn_threats: PawnThreats) -> bool {
        if square == self.position {
            return false;
        }
        match (pawn_threats, self.kind) {
            (PawnThreats::CaptureMovesOnly, _) => self.can_move_to(board, square),
            (PawnThreats::Diagonals, PieceKind::Pawn) => {
                pawn_threat_targets(self.color, self.position).any(|x| x == square)
            }
            (PawnThreats::Diagonals, PieceKind::King) => {
                king_step_targets(self.position).any(|x| x == square)
            }
            (PawnThreats::Diagonals, _) => self.can_move_to(board, square),
        }
    }
}
