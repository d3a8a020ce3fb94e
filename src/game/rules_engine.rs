//! The rules engine: selection, move validation, move commitment and
//! end-of-turn classification for one game.
//!
//! The engine owns the board, the side to move, the game-over flag and the
//! current selection. Callers select a piece, then ask to move it:
//!
//! ```
//! use plum_rules::game::collaborators::{AlwaysQueen, NullStatusSink};
//! use plum_rules::game::rules_engine::RulesEngine;
//! use plum_rules::utils::algebraic::algebraic_to_position;
//!
//! let mut engine = RulesEngine::new(AlwaysQueen, NullStatusSink);
//! engine.select_piece(algebraic_to_position("e2").unwrap());
//! assert!(engine.move_piece(algebraic_to_position("e4").unwrap()));
//! assert!(!engine.is_white_turn());
//! ```
//!
//! Rejected moves are silent: `move_piece` returns `false` and nothing about
//! the game changes.

use log::{debug, trace};

use crate::game::collaborators::{PromotionChooser, StatusAnnouncement, StatusSink};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PromotionChoice};
use crate::game_state::piece::{Piece, PieceMovement};
use crate::game_state::position::Position;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::game_status::{classify_position, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, is_legal_move, legal_moves_for_piece, LegalMove,
};
use crate::utils::render_board::render_board;

pub struct RulesEngine<P: PromotionChooser, S: StatusSink> {
    board: Board,
    side_to_move: Color,
    game_over: bool,
    status: GameStatus,
    selected: Option<Position>,
    config: RulesConfig,
    promotion_chooser: P,
    status_sink: S,
}

impl<P: PromotionChooser, S: StatusSink> RulesEngine<P, S> {
    /// A new game from the standard starting position with default rules.
    pub fn new(promotion_chooser: P, status_sink: S) -> Self {
        Self::with_config(RulesConfig::default(), promotion_chooser, status_sink)
    }

    /// A new game from the standard starting position.
    pub fn with_config(config: RulesConfig, promotion_chooser: P, status_sink: S) -> Self {
        RulesEngine {
            board: Board::new_game(),
            side_to_move: Color::Light,
            game_over: false,
            status: GameStatus::InProgress,
            selected: None,
            config,
            promotion_chooser,
            status_sink,
        }
    }

    /// A game continuing from an arbitrary board. The position is classified
    /// right away, without announcing, so a board that is already checkmate
    /// or stalemate starts out game-over.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        config: RulesConfig,
        promotion_chooser: P,
        status_sink: S,
    ) -> Self {
        let mut engine = RulesEngine {
            board,
            side_to_move,
            game_over: false,
            status: GameStatus::InProgress,
            selected: None,
            config,
            promotion_chooser,
            status_sink,
        };
        engine.status = classify_position(&mut engine.board, side_to_move, config);
        engine.game_over = engine.status.is_over();
        engine
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn is_white_turn(&self) -> bool {
        self.side_to_move == Color::Light
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Classification made at the end of the last turn.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|position| self.board.piece_at(position))
    }

    /// Select the piece on `position` if it belongs to the side to move.
    /// Otherwise the current selection is kept.
    pub fn select_piece(&mut self, position: Position) {
        match self.board.piece_at(position) {
            Some(piece) if piece.color() == self.side_to_move => {
                trace!("selected {:?} on {position}", piece.kind());
                self.selected = Some(position);
            }
            _ => trace!("ignored selection of {position}"),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selected piece to `destination`.
    ///
    /// Returns `false`, changing nothing, when no piece is selected, the game
    /// is over, or the move is not legal. On success the turn passes, the new
    /// position is classified and announced, and the selection is cleared.
    pub fn move_piece(&mut self, destination: Position) -> bool {
        if self.game_over {
            trace!("move to {destination} rejected: game is over");
            return false;
        }
        let Some(from) = self.selected else {
            trace!("move to {destination} rejected: nothing selected");
            return false;
        };
        let Some(piece) = self.board.piece_at(from).copied() else {
            return false;
        };
        if !is_legal_move(&mut self.board, from, destination, self.config) {
            trace!("move {from} -> {destination} rejected: not legal");
            return false;
        }

        let promotion = if piece.is_promotion_candidate(destination) {
            Some(self.request_promotion(piece.color()))
        } else {
            None
        };

        let Some(applied) = apply_move(&mut self.board, from, destination, promotion) else {
            return false;
        };
        debug!(
            "{} {:?} {from} -> {destination}{}{}{}",
            piece.color(),
            piece.kind(),
            applied.captured.map_or(String::new(), |x| format!(" takes {:?}", x.kind())),
            applied
                .castled_rook
                .map_or(String::new(), |(a, b)| format!(" castles rook {a} -> {b}")),
            applied
                .promoted_to
                .map_or(String::new(), |x| format!(" promotes to {x}")),
        );

        self.side_to_move = self.side_to_move.opposite();
        self.classify_and_announce();
        self.selected = None;
        trace!("\n{}", render_board(&self.board));
        true
    }

    /// Legal destinations of the piece on `position`, for either side.
    pub fn legal_moves_from(&self, position: Position) -> Vec<Position> {
        let mut scratch = self.board.clone();
        legal_moves_for_piece(&mut scratch, position, self.config)
    }

    /// Every legal move of the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        if self.game_over {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        generate_legal_moves(&mut scratch, self.side_to_move, self.config)
    }

    pub fn promotion_chooser_mut(&mut self) -> &mut P {
        &mut self.promotion_chooser
    }

    pub fn status_sink(&self) -> &S {
        &self.status_sink
    }

    pub fn status_sink_mut(&mut self) -> &mut S {
        &mut self.status_sink
    }

    fn request_promotion(&mut self, color: Color) -> PromotionChoice {
        let choice = self
            .promotion_chooser
            .choose_promotion(color, &PromotionChoice::ALL)
            .unwrap_or_default();
        debug!("{color} promotion choice: {choice}");
        choice
    }

    fn classify_and_announce(&mut self) {
        self.status = classify_position(&mut self.board, self.side_to_move, self.config);
        debug!("{} to move: {}", self.side_to_move, self.status);

        let announcement = match self.status {
            GameStatus::InProgress => None,
            GameStatus::Check(color) => Some(StatusAnnouncement::Check(color)),
            GameStatus::Checkmate { loser } => Some(StatusAnnouncement::Checkmate(loser)),
            GameStatus::Stalemate => Some(StatusAnnouncement::Stalemate),
        };
        self.game_over = self.status.is_over();
        if let Some(announcement) = announcement {
            self.status_sink.announce(announcement);
        }
    }
}
