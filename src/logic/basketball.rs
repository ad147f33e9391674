//! Basketball scoreboard: points, fouls, timeouts, quarters and a countdown clock.

use crate::logic::clock::MatchClock;
use crate::logic::score_input::ScoreInput;
use crate::models::{
    ClockTime, EventKind, EventLog, NewEvent, PerSide, PlayStatus, Player, ScoreboardError, Side,
};
use serde::{Deserialize, Serialize};

/// Timeouts each team starts with.
pub const TIMEOUTS_PER_TEAM: u32 = 4;
/// Upper bound of a team score.
pub const MAX_SCORE: i64 = 999;

/// Default quarter length when match setup does not give one.
pub fn default_quarter_length() -> ClockTime {
    ClockTime::from_mins(10)
}

/// Direction of one stepper click.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Up,
    Down,
}

/// Operator actions on a basketball scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BasketballAction {
    Start,
    Finish,
    NextQuarter,
    AddPoints { side: Side, points: u32 },
    AddFoul { side: Side },
    UseTimeout { side: Side },
    /// Overwrite a score; the difference is logged.
    SetScore { side: Side, score: i64 },
    /// Overwrite a score from typed text.
    EnterScore { side: Side, input: String },
    /// One stepper click on a score.
    StepScore { side: Side, direction: StepDirection },
    /// Rebound, assist, steal or block.
    AddStat { kind: EventKind, side: Side },
}

impl BasketballAction {
    /// Side whose roster a player is picked from, if the action can be attributed.
    pub fn attribution_side(&self) -> Option<Side> {
        use BasketballAction::*;
        match self {
            AddPoints { side, .. }
            | AddFoul { side }
            | UseTimeout { side }
            | SetScore { side, .. }
            | EnterScore { side, .. }
            | StepScore { side, .. }
            | AddStat { side, .. } => Some(*side),
            Start | Finish | NextQuarter => None,
        }
    }
}

/// In-memory state of one basketball game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Basketball {
    pub status: PlayStatus,
    pub quarter: u32,
    pub score: PerSide<u32>,
    pub fouls: PerSide<u32>,
    pub timeouts: PerSide<u32>,
    pub clock: MatchClock,
    pub events: EventLog,
}

impl Basketball {
    /// New game before tip-off; the clock counts down from `quarter_length`.
    pub fn new(quarter_length: ClockTime) -> Self {
        let mut game = Self {
            status: PlayStatus::NotStarted,
            quarter: 1,
            score: PerSide::default(),
            fouls: PerSide::default(),
            timeouts: PerSide::both(TIMEOUTS_PER_TEAM),
            clock: MatchClock::countdown(quarter_length),
            events: EventLog::default(),
        };
        game.sync_clock();
        game
    }

    /// Apply one operator action; counters and the event log change together or not at all.
    pub fn apply(&mut self, action: BasketballAction, player: Option<&Player>) -> Result<(), ScoreboardError> {
        use BasketballAction::*;
        match action {
            Start => self.set_status(PlayStatus::InProgress),
            Finish => self.set_status(PlayStatus::Finished),
            NextQuarter => {
                self.quarter += 1;
                self.clock.reset();
                log::debug!("basketball: quarter {}", self.quarter);
            }
            AddPoints { side, points } => self.add_points(side, points, player)?,
            AddFoul { side } => self.add_foul(side, player),
            UseTimeout { side } => self.use_timeout(side, player),
            SetScore { side, score } => {
                let mut input = self.score_input(side);
                let score = input.commit(score)?;
                self.change_score(side, score, player);
            }
            EnterScore { side, input } => {
                let mut widget = self.score_input(side);
                let score = widget.commit_text(&input)?;
                self.change_score(side, score, player);
            }
            StepScore { side, direction } => {
                let mut input = self.score_input(side);
                let moved = match direction {
                    StepDirection::Up => input.increment(),
                    StepDirection::Down => input.decrement(),
                };
                if moved {
                    self.change_score(side, input.value, player);
                }
            }
            AddStat { kind, side } => self.add_stat(kind, side, player)?,
        }
        Ok(())
    }

    fn score_input(&self, side: Side) -> ScoreInput {
        ScoreInput::new(i64::from(*self.score.get(side)), 0, MAX_SCORE, 1)
    }

    fn set_status(&mut self, status: PlayStatus) {
        log::debug!("basketball: {:?} -> {:?}", self.status, status);
        self.status = status;
        self.sync_clock();
    }

    /// The new total must stay within `MAX_SCORE`.
    fn add_points(&mut self, side: Side, points: u32, player: Option<&Player>) -> Result<(), ScoreboardError> {
        if points == 0 {
            return Err(ScoreboardError::InvalidPoints(points));
        }
        let total = self
            .score_input(side)
            .commit(i64::from(*self.score.get(side)) + i64::from(points))?;
        let before = self.score.snapshot();
        *self.score.get_mut(side) = total as u32;
        let score = format!("{} -> {}", before, self.score.snapshot());
        self.log(NewEvent::new(EventKind::Points, side, player.map(Player::to_ref), score).points(i64::from(points)));
        Ok(())
    }

    fn add_foul(&mut self, side: Side, player: Option<&Player>) {
        *self.fouls.get_mut(side) += 1;
        self.log(NewEvent::new(EventKind::Foul, side, player.map(Player::to_ref), self.score.snapshot()));
    }

    /// No-op once the side has none left.
    fn use_timeout(&mut self, side: Side, player: Option<&Player>) {
        let remaining = self.timeouts.get_mut(side);
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        self.log(NewEvent::new(EventKind::Timeout, side, player.map(Player::to_ref), self.score.snapshot()));
    }

    fn change_score(&mut self, side: Side, new_score: i64, player: Option<&Player>) {
        let old = i64::from(*self.score.get(side));
        let delta = new_score - old;
        if delta == 0 {
            return;
        }
        let before = self.score.snapshot();
        *self.score.get_mut(side) = new_score as u32;
        let score = format!("{} -> {}", before, self.score.snapshot());
        self.log(NewEvent::new(EventKind::ScoreChange, side, player.map(Player::to_ref), score).points(delta));
    }

    fn add_stat(&mut self, kind: EventKind, side: Side, player: Option<&Player>) -> Result<(), ScoreboardError> {
        match kind {
            EventKind::Assist | EventKind::Rebound | EventKind::Steal | EventKind::Block => {}
            other => return Err(ScoreboardError::UnsupportedEvent(other.as_str())),
        }
        self.log(NewEvent::new(kind, side, player.map(Player::to_ref), self.score.snapshot()));
        Ok(())
    }

    fn log(&mut self, event: NewEvent) {
        self.events.push(event.at(self.clock.current));
    }

    fn sync_clock(&mut self) {
        self.clock.set_disabled(self.status != PlayStatus::InProgress);
    }

    /// Score per side recomputed from POINTS and SCORE_CHANGE events.
    pub fn replayed_score(&self) -> PerSide<i64> {
        let kinds = [EventKind::Points, EventKind::ScoreChange];
        PerSide::new(
            self.events.sum_points(Side::Home, &kinds),
            self.events.sum_points(Side::Away, &kinds),
        )
    }
}
