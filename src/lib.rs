//! Crate root module declarations for the Plum rules engine.
//!
//! This file exposes the board model, piece movement, legal move
//! generation, the turn-by-turn rules engine and the text helpers so
//! binaries, benches and external front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod position;
    pub mod rules_config;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod game {
    pub mod collaborators;
    pub mod rules_engine;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_parser;
    pub mod render_board;
}
