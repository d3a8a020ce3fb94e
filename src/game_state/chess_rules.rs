//! Canonical chess-rule constants.
//!
//! Static layout literals used to set up a new game and to locate the rooks
//! taking part in castling.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from the `a` file to the `h` file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column both kings start on.
pub const KING_HOME_COLUMN: u8 = 4;

/// Column of the queenside rook.
pub const QUEENSIDE_ROOK_COLUMN: u8 = 0;

/// Column of the kingside rook.
pub const KINGSIDE_ROOK_COLUMN: u8 = 7;

/// Starting board in FEN piece-placement form.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
