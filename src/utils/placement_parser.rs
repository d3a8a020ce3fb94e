//! Board setup from the piece-placement field of a FEN string.
//!
//! Only the placement field is read; side to move, castling and clocks are
//! not part of this engine's state. Every piece starts unmoved except pawns
//! standing off their starting row, which are marked as moved. Castling
//! eligibility therefore follows from kings and rooks standing unmoved.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
    }

    let mut board = Board::new_empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut column: u8 = 0;
        for token in rank.chars() {
            if let Some(skip) = token.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(ChessErrors::InvalidPlacementToken(token));
                }
                column += skip as u8;
                if column > 8 {
                    return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
                }
                continue;
            }

            let (kind, color) = piece_from_token(token)?;
            let position = Position::new(row as u8, column)
                .map_err(|_| ChessErrors::InvalidPlacementForm(placement.to_owned()))?;
            let mut piece = Piece::new(kind, color, position);
            if kind == PieceKind::Pawn && position.row() != color.pawn_start_row() {
                piece.set_has_moved(true);
            }
            board.place_piece(piece, position);
            column += 1;
        }
        if column != 8 {
            return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
        }
    }

    Ok(board)
}

fn piece_from_token(token: char) -> Result<(PieceKind, Color), ChessErrors> {
    let color = if token.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match token.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidPlacementToken(token)),
    };
    Ok((kind, color))
}
