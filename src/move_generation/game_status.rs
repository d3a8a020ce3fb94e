//! End-of-turn classification of a position.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Side to move is not in check and has a legal move.
    #[default]
    InProgress,
    /// The given side is in check but can still move.
    Check(Color),
    /// The given side is in check with no legal move.
    Checkmate { loser: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { loser } => write!(f, "{loser} is checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Classify the position for `side_to_move`.
///
/// A missing king counts as being in check, which with no legal move left
/// classifies as checkmate.
pub fn classify_position(
    board: &mut Board,
    side_to_move: Color,
    config: RulesConfig,
) -> GameStatus {
    let in_check = is_king_in_check(board, side_to_move, config.pawn_threats);
    let can_move = has_any_legal_move(board, side_to_move, config);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            loser: side_to_move,
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(side_to_move),
        (false, true) => GameStatus::InProgress,
    }
}
