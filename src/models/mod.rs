//! Data structures for the scoreboard: players, match setup, events, clock readings.

mod error;
mod event;
mod game;
mod player;
mod time;

pub use error::ScoreboardError;
pub use event::{Event, EventKind, EventLog, NewEvent};
pub use game::{MatchId, MatchSetup, PerSide, PlayStatus, Side, Sport};
pub use player::{Player, PlayerId, PlayerRef, TeamSetup};
pub use time::ClockTime;
