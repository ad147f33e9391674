//! Live match scoreboard web app: library with models and the scoreboard engine.

pub mod logic;
pub mod models;

pub use logic::{
    events_to_csv, Basketball, BasketballAction, Football, FootballAction, FootballStatus, Game,
    MatchClock, MatchStats, PlayerSelection, ScoreInput, Scoreboard, ScoreboardAction,
    StepDirection, Volleyball, VolleyballAction,
};
pub use models::{
    ClockTime, Event, EventKind, MatchId, MatchSetup, PerSide, PlayStatus, Player, PlayerId,
    PlayerRef, ScoreboardError, Side, Sport, TeamSetup,
};
