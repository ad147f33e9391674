//! Errors returned by scoreboard operations.

use crate::models::game::Sport;
use crate::models::player::PlayerId;

/// Errors that can occur while operating a scoreboard.
///
/// Operator slips the scoreboard tolerates (exhausted timeouts, dismissed player dialog,
/// goals after full time) are not errors: they are accepted or ignored silently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// Action belongs to another sport than the one this scoreboard runs.
    WrongSport { expected: Sport, actual: Sport },
    /// Player id not on the roster offered for selection.
    PlayerNotFound(PlayerId),
    /// Confirm/dismiss called while no player selection is open.
    NoPendingSelection,
    /// Action cannot be attributed to a player (e.g. clock or status changes).
    NotAttributable,
    /// Clock reading not in `mm:ss` form.
    InvalidTime(String),
    /// Direct entry was not an integer.
    NotANumber(String),
    /// Direct entry outside the allowed bounds.
    OutOfRange { value: i64, min: i64, max: i64 },
    /// Points must be a positive amount.
    InvalidPoints(u32),
    /// Event kind not recorded by this sport.
    UnsupportedEvent(&'static str),
    /// Clock control on a sport that runs without a clock.
    NoClock(Sport),
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::WrongSport { expected, actual } => {
                write!(f, "This scoreboard runs {}, not {}", expected, actual)
            }
            ScoreboardError::PlayerNotFound(id) => write!(f, "Player {} is not on the roster", id),
            ScoreboardError::NoPendingSelection => write!(f, "No player selection is open"),
            ScoreboardError::NotAttributable => write!(f, "This action cannot be attributed to a player"),
            ScoreboardError::InvalidTime(s) => write!(f, "Invalid clock time '{}' (expected mm:ss)", s),
            ScoreboardError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            ScoreboardError::OutOfRange { value, min, max } => {
                write!(f, "{} is outside the allowed range {}..={}", value, min, max)
            }
            ScoreboardError::InvalidPoints(p) => write!(f, "Points must be positive (got {})", p),
            ScoreboardError::UnsupportedEvent(kind) => {
                write!(f, "Event '{}' is not recorded for this sport", kind)
            }
            ScoreboardError::NoClock(sport) => write!(f, "A {} scoreboard has no clock", sport),
        }
    }
}

impl std::error::Error for ScoreboardError {}
