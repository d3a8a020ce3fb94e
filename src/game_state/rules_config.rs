//! Rule variations the engine can be configured with.
//!
//! Two rules have a permissive variant: castling that only guards the
//! landing square, and an attack scan in which pawns threaten only squares
//! they could capture on. Each is a switch; the defaults play standard chess.

use crate::chess_errors::ChessErrors;

/// Environment variable selecting [`CastlingSafety`].
pub const CASTLING_ENV_KEY: &str = "PLUM_RULES_CASTLING";

/// Environment variable selecting [`PawnThreats`].
pub const PAWN_THREATS_ENV_KEY: &str = "PLUM_RULES_PAWN_THREATS";

/// Which king squares must be safe for castling to be legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastlingSafety {
    /// The king may not castle out of check or across an attacked square.
    #[default]
    FullPath,
    /// Only the king's landing square is checked.
    DestinationOnly,
}

/// How the attack scan decides that a piece threatens a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PawnThreats {
    /// Pawns threaten both forward diagonals whether or not they are occupied,
    /// and kings threaten only their eight neighbours.
    #[default]
    Diagonals,
    /// A piece threatens a square only if it could move there, so a pawn
    /// never threatens an empty diagonal square.
    CaptureMovesOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    pub castling_safety: CastlingSafety,
    pub pawn_threats: PawnThreats,
}

impl RulesConfig {
    /// Both permissive variants at once.
    pub const fn reference() -> Self {
        RulesConfig {
            castling_safety: CastlingSafety::DestinationOnly,
            pawn_threats: PawnThreats::CaptureMovesOnly,
        }
    }

    /// Read the switches from `PLUM_RULES_CASTLING` and `PLUM_RULES_PAWN_THREATS`.
    /// Unset variables keep their default.
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ChessErrors>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = RulesConfig::default();

        if let Some(value) = lookup(CASTLING_ENV_KEY) {
            config.castling_safety = match normalize(&value).as_str() {
                "full-path" => CastlingSafety::FullPath,
                "destination-only" => CastlingSafety::DestinationOnly,
                _ => {
                    return Err(ChessErrors::InvalidConfigValue {
                        key: CASTLING_ENV_KEY,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(PAWN_THREATS_ENV_KEY) {
            config.pawn_threats = match normalize(&value).as_str() {
                "diagonals" => PawnThreats::Diagonals,
                "capture-moves-only" => PawnThreats::CaptureMovesOnly,
                _ => {
                    return Err(ChessErrors::InvalidConfigValue {
                        key: PAWN_THREATS_ENV_KEY,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
