//! Errors used throughout the rules engine.
//!
//! Rule violations (illegal selections, illegal moves) are not errors: the
//! engine reports them as `false` returns or silent no-ops. `ChessErrors`
//! covers input that cannot be interpreted at all, such as a square name
//! outside `a1..h8`, a malformed board placement string, or an unknown
//! configuration value.

use thiserror::Error;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Row or column outside `0..=7`.
    ///
    /// Payload: (row, column) as provided by the caller.
    #[error("invalid row/column ({0}, {1}); both must be in 0..=7")]
    InvalidRowOrColumn(i16, i16),

    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// Unexpected character in a piece-placement string.
    #[error("invalid placement token: {0:?}")]
    InvalidPlacementToken(char),

    /// Placement string did not describe exactly eight ranks of eight files.
    #[error("malformed placement string: {0:?}")]
    InvalidPlacementForm(String),

    /// A configuration variable held a value the engine does not understand.
    #[error("invalid value {value:?} for configuration key {key}")]
    InvalidConfigValue { key: &'static str, value: String },
}
