//! Trial moves that are always rolled back.
//!
//! `SimulatedMove` performs a single piece move on a borrowed board and
//! restores the board when dropped, so every exit path of the caller (early
//! returns included) leaves the board exactly as it found it.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// Everything needed to put a trial move back.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    /// The mover as it stood before the trial, "has moved" flag included.
    pub mover: Piece,
    pub destination: Position,
    /// Occupant of the destination before the trial, if any.
    pub captured: Option<Piece>,
}

/// Scoped trial move. The board is restored on drop.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    undo: UndoState,
}

impl<'a> SimulatedMove<'a> {
    /// Move the piece on `from` to `destination`, capturing any occupant.
    /// Returns `None` (and leaves the board untouched) when `from` is empty.
    ///
    /// Castling's rook relocation is not part of a trial move.
    pub fn begin(board: &'a mut Board, from: Position, destination: Position) -> Option<Self> {
        let mover = *board.piece_at(from)?;
        let captured = board.piece_at(destination).copied();

        if captured.is_some() {
            board.remove_piece(destination);
        }
        board.remove_piece(from);
        board.place_piece(mover, destination);

        Some(SimulatedMove {
            board,
            undo: UndoState {
                mover,
                destination,
                captured,
            },
        })
    }

    /// The board with the trial move applied.
    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    #[inline]
    pub fn mover(&self) -> &Piece {
        &self.undo.mover
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        let UndoState {
            mover,
            destination,
            captured,
        } = self.undo;
        self.board.remove_piece(destination);
        self.board.place_piece(mover, mover.position());
        if let Some(captured) = captured {
            self.board.place_piece(captured, destination);
        }
    }
}
