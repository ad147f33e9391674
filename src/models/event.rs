//! Event log records shared by all sport variants.

use crate::models::game::Side;
use crate::models::player::PlayerRef;
use crate::models::time::ClockTime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened. Scoring kinds change counters; stat-only kinds are only counted by stats.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    /// Basketball basket worth `points`.
    Points,
    Foul,
    Timeout,
    SetWin,
    /// Basketball direct score correction; `points` holds the delta.
    ScoreChange,
    /// Volleyball rally point.
    Point,
    Assist,
    Rebound,
    Steal,
    Block,
    Serve,
    Spike,
    Dig,
}

impl EventKind {
    /// Snake-case name used in logs and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
            EventKind::Points => "points",
            EventKind::Foul => "foul",
            EventKind::Timeout => "timeout",
            EventKind::SetWin => "set_win",
            EventKind::ScoreChange => "score_change",
            EventKind::Point => "point",
            EventKind::Assist => "assist",
            EventKind::Rebound => "rebound",
            EventKind::Steal => "steal",
            EventKind::Block => "block",
            EventKind::Serve => "serve",
            EventKind::Spike => "spike",
            EventKind::Dig => "dig",
        }
    }
}

/// An immutable record in a match's event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// 1-based position in the log.
    pub seq: u32,
    pub kind: EventKind,
    pub side: Side,
    pub player: Option<PlayerRef>,
    /// Score effect for `Points` and `ScoreChange` (negative for downward corrections).
    pub points: Option<i64>,
    /// Clock reading when logged; `None` for sports without a clock.
    pub match_time: Option<ClockTime>,
    pub timestamp: DateTime<Utc>,
    /// Display snapshot of the score, not used for replay.
    pub score: String,
}

/// Append-only event log. Insertion order is chronological and display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog(Vec<Event>);

/// Fields of an event before it gets its place in the log.
pub struct NewEvent {
    pub kind: EventKind,
    pub side: Side,
    pub player: Option<PlayerRef>,
    pub points: Option<i64>,
    pub match_time: Option<ClockTime>,
    pub score: String,
}

impl NewEvent {
    /// Event without points or match time.
    pub fn new(kind: EventKind, side: Side, player: Option<PlayerRef>, score: String) -> Self {
        Self {
            kind,
            side,
            player,
            points: None,
            match_time: None,
            score,
        }
    }

    /// Attach a point value or score delta.
    pub fn points(mut self, points: i64) -> Self {
        self.points = Some(points);
        self
    }

    /// Attach the clock reading.
    pub fn at(mut self, time: ClockTime) -> Self {
        self.match_time = Some(time);
        self
    }
}

impl EventLog {
    /// Append with the next sequence number and the current time.
    pub fn push(&mut self, new: NewEvent) -> &Event {
        let seq = self.0.len() as u32 + 1;
        self.0.push(Event {
            seq,
            kind: new.kind,
            side: new.side,
            player: new.player,
            points: new.points,
            match_time: new.match_time,
            timestamp: Utc::now(),
            score: new.score,
        });
        &self.0[self.0.len() - 1]
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.0.iter()
    }

    /// Sum of `points` for the given kinds on one side. Used to check counters against the log.
    pub fn sum_points(&self, side: Side, kinds: &[EventKind]) -> i64 {
        self.0
            .iter()
            .filter(|e| e.side == side && kinds.contains(&e.kind))
            .map(|e| e.points.unwrap_or(1))
            .sum()
    }

    /// Number of events of one kind for one side.
    pub fn count(&self, side: Side, kind: EventKind) -> usize {
        self.0.iter().filter(|e| e.side == side && e.kind == kind).count()
    }
}
