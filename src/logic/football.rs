//! Football scoreboard: halves, added time, goals and cards.
//!
//! Period changes are operator actions and never follow the clock. Nothing stops an
//! operator from logging a goal after full time; the scoreboard records what it is told.

use crate::logic::clock::MatchClock;
use crate::logic::score_input::ScoreInput;
use crate::models::{
    ClockTime, EventKind, EventLog, NewEvent, PerSide, Player, ScoreboardError, Side,
};
use serde::{Deserialize, Serialize};

/// Upper bound for added time, in minutes.
pub const MAX_ADDED_TIME: i64 = 15;

/// Match period, advanced by the operator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootballStatus {
    #[default]
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    AddedTime1,
    AddedTime2,
    FullTime,
}

impl FootballStatus {
    /// Status the "next period" button moves to.
    pub fn next(self) -> FootballStatus {
        use FootballStatus::*;
        match self {
            NotStarted => FirstHalf,
            FirstHalf | AddedTime1 => HalfTime,
            HalfTime => SecondHalf,
            SecondHalf | AddedTime2 | FullTime => FullTime,
        }
    }

    fn is_playing(self) -> bool {
        use FootballStatus::*;
        matches!(self, FirstHalf | SecondHalf | AddedTime1 | AddedTime2)
    }
}

/// Operator actions on a football scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FootballAction {
    /// Move to the next period.
    Advance,
    /// Operator override of the period.
    SetStatus { status: FootballStatus },
    /// Goal, card or assist for a side.
    AddEvent { kind: EventKind, side: Side },
    /// Announce added time for the current half.
    SetAddedTime { minutes: i64 },
}

impl FootballAction {
    /// Side whose roster is offered when attributing this action, if it can be attributed.
    pub fn attribution_side(&self) -> Option<Side> {
        match self {
            FootballAction::AddEvent { side, .. } => Some(*side),
            _ => None,
        }
    }
}

/// In-memory state of one football match.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Football {
    pub status: FootballStatus,
    /// 1 or 2; decides which added-time status applies.
    pub half: u8,
    pub score: PerSide<u32>,
    pub added_time: u32,
    pub clock: MatchClock,
    pub events: EventLog,
}

impl Default for Football {
    fn default() -> Self {
        Self::new()
    }
}

impl Football {
    /// New match at 0-0, not started.
    pub fn new() -> Self {
        let mut game = Self {
            status: FootballStatus::NotStarted,
            half: 1,
            score: PerSide::default(),
            added_time: 0,
            clock: MatchClock::count_up(ClockTime::ZERO),
            events: EventLog::default(),
        };
        game.sync_clock();
        game
    }

    /// Single transition function: every counter change and its event happen here together.
    pub fn apply(&mut self, action: FootballAction, player: Option<&Player>) -> Result<(), ScoreboardError> {
        match action {
            FootballAction::Advance => self.set_status(self.status.next()),
            FootballAction::SetStatus { status } => self.set_status(status),
            FootballAction::AddEvent { kind, side } => self.add_event(kind, side, player)?,
            FootballAction::SetAddedTime { minutes } => self.set_added_time(minutes)?,
        }
        Ok(())
    }

    fn set_status(&mut self, status: FootballStatus) {
        match status {
            FootballStatus::FirstHalf | FootballStatus::AddedTime1 => self.half = 1,
            FootballStatus::SecondHalf | FootballStatus::AddedTime2 => self.half = 2,
            _ => {}
        }
        log::debug!("football: {:?} -> {:?}", self.status, status);
        self.status = status;
        self.sync_clock();
    }

    fn add_event(&mut self, kind: EventKind, side: Side, player: Option<&Player>) -> Result<(), ScoreboardError> {
        match kind {
            EventKind::Goal => *self.score.get_mut(side) += 1,
            EventKind::YellowCard | EventKind::RedCard | EventKind::Assist => {}
            other => return Err(ScoreboardError::UnsupportedEvent(other.as_str())),
        }
        let event = NewEvent::new(kind, side, player.map(Player::to_ref), self.score.snapshot())
            .at(self.clock.current);
        self.events.push(event);
        Ok(())
    }

    /// Sets added time and, as a side effect, enters the added-time period of the current half.
    fn set_added_time(&mut self, minutes: i64) -> Result<(), ScoreboardError> {
        let mut input = ScoreInput::new(i64::from(self.added_time), 0, MAX_ADDED_TIME, 1);
        let minutes = input.commit(minutes)?;
        self.added_time = minutes as u32;
        let status = if self.half == 1 {
            FootballStatus::AddedTime1
        } else {
            FootballStatus::AddedTime2
        };
        self.set_status(status);
        Ok(())
    }

    fn sync_clock(&mut self) {
        self.clock.set_disabled(!self.status.is_playing());
    }

    /// Goals per side recomputed from the event log.
    pub fn replayed_score(&self) -> PerSide<i64> {
        PerSide::new(
            self.events.sum_points(Side::Home, &[EventKind::Goal]),
            self.events.sum_points(Side::Away, &[EventKind::Goal]),
        )
    }
}
