//! Outward-facing collaborators the rules engine calls into.
//!
//! The engine never talks to a user directly. When a pawn promotes it asks a
//! [`PromotionChooser`]; when a turn ends in check, checkmate or stalemate it
//! tells a [`StatusSink`]. Both calls are synchronous.

use std::fmt;

use log::info;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::{Color, PromotionChoice};

/// Picks the piece a pawn promotes to. `None` means "no definite choice",
/// which the engine treats as Queen.
pub trait PromotionChooser {
    fn choose_promotion(
        &mut self,
        color: Color,
        options: &[PromotionChoice],
    ) -> Option<PromotionChoice>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, &[PromotionChoice]) -> Option<PromotionChoice>,
{
    fn choose_promotion(
        &mut self,
        color: Color,
        options: &[PromotionChoice],
    ) -> Option<PromotionChoice> {
        self(color, options)
    }
}

/// Always promotes to a queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose_promotion(
        &mut self,
        _color: Color,
        _options: &[PromotionChoice],
    ) -> Option<PromotionChoice> {
        Some(PromotionChoice::Queen)
    }
}

/// Always answers with the same choice.
#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion(pub PromotionChoice);

impl PromotionChooser for FixedPromotion {
    fn choose_promotion(
        &mut self,
        _color: Color,
        _options: &[PromotionChoice],
    ) -> Option<PromotionChoice> {
        Some(self.0)
    }
}

/// Picks uniformly among the offered options.
#[derive(Debug, Clone)]
pub struct RandomPromotion<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPromotion<R> {
    pub fn new(rng: R) -> Self {
        RandomPromotion { rng }
    }
}

impl<R: Rng> PromotionChooser for RandomPromotion<R> {
    fn choose_promotion(
        &mut self,
        _color: Color,
        options: &[PromotionChoice],
    ) -> Option<PromotionChoice> {
        options.choose(&mut self.rng).copied()
    }
}

/// A notification the engine emits at the end of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAnnouncement {
    /// The given side is in check.
    Check(Color),
    /// The given side is checkmated.
    Checkmate(Color),
    /// Draw by stalemate.
    Stalemate,
}

impl StatusAnnouncement {
    pub fn message(&self) -> String {
        match self {
            StatusAnnouncement::Check(color) => format!("{} is in check!", capitalized(*color)),
            StatusAnnouncement::Checkmate(color) => {
                format!("{} is checkmated!", capitalized(*color))
            }
            StatusAnnouncement::Stalemate => "Draw by stalemate!".to_owned(),
        }
    }
}

impl fmt::Display for StatusAnnouncement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn capitalized(color: Color) -> &'static str {
    match color {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}

/// Receives status announcements. Fire-and-forget from the engine's side.
pub trait StatusSink {
    fn announce(&mut self, announcement: StatusAnnouncement);
}

impl<F> StatusSink for F
where
    F: FnMut(StatusAnnouncement),
{
    fn announce(&mut self, announcement: StatusAnnouncement) {
        self(announcement)
    }
}

/// Writes announcements to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn announce(&mut self, announcement: StatusAnnouncement) {
        info!("{announcement}");
    }
}

/// Keeps every announcement in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatusSink {
    pub announcements: Vec<StatusAnnouncement>,
}

impl RecordingStatusSink {
    pub fn last(&self) -> Option<&StatusAnnouncement> {
        self.announcements.last()
    }
}

impl StatusSink for RecordingStatusSink {
    fn announce(&mut self, announcement: StatusAnnouncement) {
        self.announcements.push(announcement);
    }
}

/// Discards announcements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn announce(&mut self, _announcement: StatusAnnouncement) {}
}
