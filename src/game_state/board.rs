//! 8x8 grid of optional pieces.
//!
//! The board only stores and retrieves pieces. It performs no validation and
//! knows nothing about chess rules; that is the job of the rules engine.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// All 32 pieces on their standard starting squares, none of them moved.
    pub fn new_game() -> Self {
        let mut board = Board::new_empty();
        for position in Position::all() {
            let column = position.column() as usize;
            let setup = match position.row() {
                0 => Some((BACK_RANK[column], Color::Dark)),
                1 => Some((PieceKind::Pawn, Color::Dark)),
                6 => Some((PieceKind::Pawn, Color::Light)),
                7 => Some((BACK_RANK[column], Color::Light)),
                _ => None,
            };
            if let Some((kind, color)) = setup {
                board.place_piece(Piece::new(kind, color, position), position);
            }
        }
        board
    }

    /// Write `piece` into `position`, overwriting any prior occupant, and
    /// update the piece's stored square.
    pub fn place_piece(&mut self, mut piece: Piece, position: Position) {
        piece.set_position(position);
        *self.cell_mut(position) = Some(piece);
    }

    /// Clear the cell. The removed piece is not returned; query it first if needed.
    pub fn remove_piece(&mut self, position: Position) {
        *self.cell_mut(position) = None;
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.grid[position.row() as usize][position.column() as usize].as_ref()
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Every piece of `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(move |piece| piece.color() == color)
    }

    /// Square of the first king of `color`, if any.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(|piece| piece.position())
    }

    #[inline]
    fn cell_mut(&mut self, position: Position) -> &mut Option<Piece> {
        &mut self.grid[position.row() as usize][position.column() as usize]
    }
}
