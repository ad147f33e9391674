//! Match setup (input from the hosting page), Side and Sport.

use crate::models::player::{Player, PlayerId, TeamSetup};
use crate::models::time::ClockTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an open scoreboard.
pub type MatchId = Uuid;

/// Which team an event or counter belongs to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    #[serde(alias = "A")]
    Home,
    #[serde(alias = "B")]
    Away,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Sport variant the scoreboard runs. Chosen once when the scoreboard opens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sport::Football => write!(f, "football"),
            Sport::Basketball => write!(f, "basketball"),
            Sport::Volleyball => write!(f, "volleyball"),
        }
    }
}

/// Everything the hosting page hands over when opening a scoreboard. Read-only afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub home: TeamSetup,
    pub away: TeamSetup,
    pub sport: Sport,
    /// Status tag from the match listing (e.g. "scheduled"); carried through, never interpreted.
    #[serde(default)]
    pub status: Option<String>,
    /// Quarter length for basketball. Defaults to 10:00.
    #[serde(default)]
    pub period_length: Option<ClockTime>,
}

impl MatchSetup {
    /// Setup with no status text and the default period length.
    pub fn new(sport: Sport, home: TeamSetup, away: TeamSetup) -> Self {
        Self {
            home,
            away,
            sport,
            status: None,
            period_length: None,
        }
    }

    /// Team playing on `side`.
    pub fn team(&self, side: Side) -> &TeamSetup {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Player with `id` on `side`'s roster.
    pub fn find_player(&self, side: Side, id: PlayerId) -> Option<&Player> {
        self.team(side).find_player(id)
    }
}

/// A pair of per-team values (scores, fouls, timeouts, sets).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// Value for `side`.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Mutable value for `side`.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}

impl<T: Clone> PerSide<T> {
    /// Same value on both sides.
    pub fn both(value: T) -> Self {
        Self {
            home: value.clone(),
            away: value,
        }
    }
}

impl<T: std::fmt::Display> PerSide<T> {
    /// Score snapshot as shown in the event list, e.g. `2-1`.
    pub fn snapshot(&self) -> String {
        format!("{}-{}", self.home, self.away)
    }
}

/// Progress of a match whose periods are not named (basketball, volleyball).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStatus {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}
