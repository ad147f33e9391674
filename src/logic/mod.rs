//! Scoreboard engine: shared widgets, the three sport variants and the dispatcher.

pub mod basketball;
pub mod clock;
pub mod export;
pub mod football;
pub mod player_select;
pub mod score_input;
pub mod scoreboard;
pub mod stats;
pub mod volleyball;

pub use basketball::{Basketball, BasketballAction, StepDirection};
pub use clock::MatchClock;
pub use export::events_to_csv;
pub use football::{Football, FootballAction, FootballStatus};
pub use player_select::PlayerSelection;
pub use score_input::ScoreInput;
pub use scoreboard::{Game, Scoreboard, ScoreboardAction};
pub use stats::{leaders, match_stats, player_stats, team_totals, Leader, MatchStats, PlayerStatLine, StatField};
pub use volleyball::{Volleyball, VolleyballAction};
