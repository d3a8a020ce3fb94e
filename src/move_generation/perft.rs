//! Move-path enumeration counts used to validate legal move generation.
//!
//! Each promotion choice counts as a separate move, as in standard perft.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PromotionChoice};
use crate::game_state::piece::PieceMovement;
use crate::game_state::rules_config::RulesConfig;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_any_legal_move, LegalMove,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8, config: RulesConfig) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let moves = generate_legal_moves(&mut scratch, side_to_move, config);
    let mut total = PerftCounts::default();

    for mv in moves {
        for promotion in promotion_options(board, mv) {
            let mut next = board.clone();
            let Some(applied) = apply_move(&mut next, mv.from, mv.to, promotion) else {
                continue;
            };

            if depth == 1 {
                let opponent = side_to_move.opposite();
                let gives_check = is_king_in_check(&next, opponent, config.pawn_threats);
                total.merge(PerftCounts {
                    nodes: 1,
                    captures: usize::from(applied.captured.is_some()),
                    castles: usize::from(applied.castled_rook.is_some()),
                    promotions: usize::from(applied.promoted_to.is_some()),
                    checks: usize::from(gives_check),
                    checkmates: usize::from(
                        gives_check && !has_any_legal_move(&mut next, opponent, config),
                    ),
                });
            } else {
                total.merge(perft(&next, side_to_move.opposite(), depth - 1, config));
            }
        }
    }

    total
}

fn promotion_options(board: &Board, mv: LegalMove) -> Vec<Option<PromotionChoice>> {
    let promotes = board
        .piece_at(mv.from)
        .is_some_and(|piece| piece.is_promotion_candidate(mv.to));
    if promotes {
        PromotionChoice::ALL.into_iter().map(Some).collect()
    } else {
        vec![None]
    }
}
