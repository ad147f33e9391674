//! Volleyball scoreboard: rally scoring, best-of-five sets, timeouts and service.

use crate::models::{
    EventKind, EventLog, NewEvent, PerSide, PlayStatus, Player, PlayerRef, ScoreboardError, Side,
};
use serde::{Deserialize, Serialize};

/// Timeouts per team, restored each set.
pub const TIMEOUTS_PER_SET: u32 = 2;
/// Sets needed to win the match.
pub const SETS_TO_WIN: u32 = 3;
/// Set number played to the shorter target.
pub const DECIDING_SET: u32 = 5;
const SET_POINTS: u32 = 25;
const DECIDING_SET_POINTS: u32 = 15;
const WIN_MARGIN: u32 = 2;

/// True when `score` against `opponent` closes the given set.
pub fn is_set_won(set: u32, score: u32, opponent: u32) -> bool {
    let target = if set == DECIDING_SET { DECIDING_SET_POINTS } else { SET_POINTS };
    score >= target && score >= opponent + WIN_MARGIN
}

/// Operator actions on a volleyball scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VolleyballAction {
    Start,
    AddPoint { side: Side },
    UseTimeout { side: Side },
    SetServing { side: Side },
    /// Serve, block, spike or dig.
    AddStat { kind: EventKind, side: Side },
}

impl VolleyballAction {
    /// Side whose roster a player is picked from, if the action can be attributed.
    pub fn attribution_side(&self) -> Option<Side> {
        match self {
            VolleyballAction::AddPoint { side }
            | VolleyballAction::UseTimeout { side }
            | VolleyballAction::AddStat { side, .. } => Some(*side),
            VolleyballAction::Start | VolleyballAction::SetServing { .. } => None,
        }
    }
}

/// In-memory state of one volleyball match.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Volleyball {
    pub status: PlayStatus,
    pub current_set: u32,
    pub score: PerSide<u32>,
    pub sets_won: PerSide<u32>,
    /// Final rally score of every completed set, in order.
    pub set_scores: Vec<PerSide<u32>>,
    pub timeouts: PerSide<u32>,
    pub serving: Side,
    pub events: EventLog,
}

impl Default for Volleyball {
    fn default() -> Self {
        Self::new()
    }
}

impl Volleyball {
    /// New match, first set at 0-0.
    pub fn new() -> Self {
        Self {
            status: PlayStatus::NotStarted,
            current_set: 1,
            score: PerSide::default(),
            sets_won: PerSide::default(),
            set_scores: Vec::new(),
            timeouts: PerSide::both(TIMEOUTS_PER_SET),
            serving: Side::Home,
            events: EventLog::default(),
        }
    }

    /// Apply one operator action; a set-winning point also closes the set.
    pub fn apply(&mut self, action: VolleyballAction, player: Option<&Player>) -> Result<(), ScoreboardError> {
        match action {
            VolleyballAction::Start => {
                self.status = PlayStatus::InProgress;
                log::debug!("volleyball: match started, set {}", self.current_set);
            }
            VolleyballAction::AddPoint { side } => self.add_point(side, player.map(Player::to_ref)),
            VolleyballAction::UseTimeout { side } => self.use_timeout(side, player),
            VolleyballAction::SetServing { side } => self.serving = side,
            VolleyballAction::AddStat { kind, side } => match kind {
                EventKind::Serve | EventKind::Block | EventKind::Spike | EventKind::Dig => {
                    self.events
                        .push(NewEvent::new(kind, side, player.map(Player::to_ref), self.score.snapshot()));
                }
                other => return Err(ScoreboardError::UnsupportedEvent(other.as_str())),
            },
        }
        Ok(())
    }

    /// Rally point. The scorer takes service unless the point closed the set.
    fn add_point(&mut self, side: Side, player: Option<PlayerRef>) {
        *self.score.get_mut(side) += 1;
        self.events
            .push(NewEvent::new(EventKind::Point, side, player.clone(), self.score.snapshot()));

        let scored = *self.score.get(side);
        let opponent = *self.score.get(side.opponent());
        if is_set_won(self.current_set, scored, opponent) {
            self.win_set(side, player);
        } else {
            self.serving = side;
        }
    }

    fn win_set(&mut self, side: Side, player: Option<PlayerRef>) {
        let set_score = self.score;
        self.set_scores.push(set_score);
        *self.sets_won.get_mut(side) += 1;
        log::info!(
            "volleyball: set {} to {} ({}), sets {}",
            self.current_set,
            side,
            set_score.snapshot(),
            self.sets_won.snapshot()
        );

        if *self.sets_won.get(side) >= SETS_TO_WIN {
            self.status = PlayStatus::Finished;
            log::info!("volleyball: match won by {}", side);
        } else {
            self.current_set += 1;
            self.score = PerSide::default();
            self.timeouts = PerSide::both(TIMEOUTS_PER_SET);
        }
        self.events
            .push(NewEvent::new(EventKind::SetWin, side, player, set_score.snapshot()));
    }

    fn use_timeout(&mut self, side: Side, player: Option<&Player>) {
        let remaining = self.timeouts.get_mut(side);
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        self.events
            .push(NewEvent::new(EventKind::Timeout, side, player.map(Player::to_ref), self.score.snapshot()));
    }

    /// Current-set rally points per side recomputed from POINT events since the last SET_WIN.
    pub fn replayed_score(&self) -> PerSide<i64> {
        let mut score = PerSide::<i64>::default();
        let mut sets = PerSide::<u32>::default();
        for event in self.events.iter() {
            match event.kind {
                EventKind::Point => *score.get_mut(event.side) += 1,
                EventKind::SetWin => {
                    *sets.get_mut(event.side) += 1;
                    if *sets.get(event.side) < SETS_TO_WIN {
                        score = PerSide::default();
                    }
                }
                _ => {}
            }
        }
        score
    }

    /// Sets won per side recomputed from SET_WIN events.
    pub fn replayed_sets(&self) -> PerSide<usize> {
        PerSide::new(
            self.events.count(Side::Home, EventKind::SetWin),
            self.events.count(Side::Away, EventKind::SetWin),
        )
    }
}
