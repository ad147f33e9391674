//! Scoreboard: picks the sport variant once from match setup and routes operator actions to it.

use crate::logic::basketball::{default_quarter_length, Basketball, BasketballAction};
use crate::logic::clock::MatchClock;
use crate::logic::football::{Football, FootballAction};
use crate::logic::player_select::PlayerSelection;
use crate::logic::stats::{match_stats, MatchStats};
use crate::logic::volleyball::{Volleyball, VolleyballAction};
use crate::models::{ClockTime, Event, MatchId, MatchSetup, Player, PlayerId, ScoreboardError, Side, Sport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sport-specific match state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "sport", rename_all = "snake_case")]
pub enum Game {
    Football(Football),
    Basketball(Basketball),
    Volleyball(Volleyball),
}

impl Game {
    /// Variant for the setup sport, in its initial state.
    pub fn for_setup(setup: &MatchSetup) -> Self {
        match setup.sport {
            Sport::Football => Game::Football(Football::new()),
            Sport::Basketball => Game::Basketball(Basketball::new(
                setup.period_length.unwrap_or_else(default_quarter_length),
            )),
            Sport::Volleyball => Game::Volleyball(Volleyball::new()),
        }
    }

    pub fn sport(&self) -> Sport {
        match self {
            Game::Football(_) => Sport::Football,
            Game::Basketball(_) => Sport::Basketball,
            Game::Volleyball(_) => Sport::Volleyball,
        }
    }

    pub fn events(&self) -> &[Event] {
        match self {
            Game::Football(g) => g.events.as_slice(),
            Game::Basketball(g) => g.events.as_slice(),
            Game::Volleyball(g) => g.events.as_slice(),
        }
    }

    /// The match clock; volleyball has none.
    pub fn clock_mut(&mut self) -> Option<&mut MatchClock> {
        match self {
            Game::Football(g) => Some(&mut g.clock),
            Game::Basketball(g) => Some(&mut g.clock),
            Game::Volleyball(_) => None,
        }
    }
}

/// An operator action, tagged with the sport it is meant for.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", content = "action", rename_all = "snake_case")]
pub enum ScoreboardAction {
    Football(FootballAction),
    Basketball(BasketballAction),
    Volleyball(VolleyballAction),
}

impl ScoreboardAction {
    pub fn sport(&self) -> Sport {
        match self {
            ScoreboardAction::Football(_) => Sport::Football,
            ScoreboardAction::Basketball(_) => Sport::Basketball,
            ScoreboardAction::Volleyball(_) => Sport::Volleyball,
        }
    }

    pub fn attribution_side(&self) -> Option<Side> {
        match self {
            ScoreboardAction::Football(a) => a.attribution_side(),
            ScoreboardAction::Basketball(a) => a.attribution_side(),
            ScoreboardAction::Volleyball(a) => a.attribution_side(),
        }
    }

    /// Short label for the player selection title.
    fn label(&self) -> String {
        use BasketballAction as B;
        match self {
            ScoreboardAction::Football(FootballAction::AddEvent { kind, .. })
            | ScoreboardAction::Basketball(B::AddStat { kind, .. })
            | ScoreboardAction::Volleyball(VolleyballAction::AddStat { kind, .. }) => kind.as_str().to_string(),
            ScoreboardAction::Basketball(B::AddPoints { points, .. }) => format!("{} points", points),
            ScoreboardAction::Basketball(B::AddFoul { .. }) => "foul".to_string(),
            ScoreboardAction::Basketball(B::UseTimeout { .. })
            | ScoreboardAction::Volleyball(VolleyballAction::UseTimeout { .. }) => "timeout".to_string(),
            ScoreboardAction::Basketball(B::SetScore { .. } | B::EnterScore { .. } | B::StepScore { .. }) => {
                "score change".to_string()
            }
            ScoreboardAction::Volleyball(VolleyballAction::AddPoint { .. }) => "point".to_string(),
            _ => "action".to_string(),
        }
    }
}

/// One open scoreboard: match setup, live state and any open player selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scoreboard {
    pub id: MatchId,
    pub setup: MatchSetup,
    pub game: Game,
    pub selection: Option<PlayerSelection<ScoreboardAction>>,
    pub opened_at: DateTime<Utc>,
}

impl Scoreboard {
    /// Fresh state for the match; nothing carries over from earlier sessions.
    pub fn new(setup: MatchSetup) -> Self {
        let game = Game::for_setup(&setup);
        Self {
            id: Uuid::new_v4(),
            setup,
            game,
            selection: None,
            opened_at: Utc::now(),
        }
    }

    pub fn sport(&self) -> Sport {
        self.game.sport()
    }

    pub fn events(&self) -> &[Event] {
        self.game.events()
    }

    /// Apply an action without player attribution.
    pub fn apply(&mut self, action: ScoreboardAction) -> Result<(), ScoreboardError> {
        self.apply_as(action, None)
    }

    fn apply_as(&mut self, action: ScoreboardAction, player: Option<&Player>) -> Result<(), ScoreboardError> {
        let expected = self.sport();
        match (&mut self.game, action) {
            (Game::Football(g), ScoreboardAction::Football(a)) => g.apply(a, player),
            (Game::Basketball(g), ScoreboardAction::Basketball(a)) => g.apply(a, player),
            (Game::Volleyball(g), ScoreboardAction::Volleyball(a)) => g.apply(a, player),
            (_, action) => Err(ScoreboardError::WrongSport {
                expected,
                actual: action.sport(),
            }),
        }
    }

    /// Hold an action until the operator picks a player from the acting side's roster.
    /// Opening a new selection drops any previous pending one.
    pub fn request_player(&mut self, action: ScoreboardAction) -> Result<(), ScoreboardError> {
        if action.sport() != self.sport() {
            return Err(ScoreboardError::WrongSport {
                expected: self.sport(),
                actual: action.sport(),
            });
        }
        let side = action.attribution_side().ok_or(ScoreboardError::NotAttributable)?;
        let team = self.setup.team(side);
        let title = format!("{}: {}", team.name, action.label());
        self.selection = Some(PlayerSelection::open(team, side, title, action));
        Ok(())
    }

    /// Apply the pending action attributed to the chosen player.
    pub fn confirm_player(&mut self, player_id: PlayerId) -> Result<(), ScoreboardError> {
        let selection = self.selection.take().ok_or(ScoreboardError::NoPendingSelection)?;
        match selection.choose(player_id) {
            Ok((action, player)) => self.apply_as(action, Some(&player)),
            Err((selection, e)) => {
                self.selection = Some(selection);
                Err(e)
            }
        }
    }

    /// Close the selection without choosing; the pending action is discarded.
    pub fn dismiss_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            log::debug!("scoreboard {}: dropped pending {}", self.id, selection.title);
        }
    }

    fn clock_mut(&mut self) -> Result<&mut MatchClock, ScoreboardError> {
        let sport = self.sport();
        self.game.clock_mut().ok_or(ScoreboardError::NoClock(sport))
    }

    /// Start or pause the match clock.
    pub fn toggle_clock(&mut self) -> Result<(), ScoreboardError> {
        self.clock_mut()?.toggle();
        Ok(())
    }

    /// Stop the clock and put it back to its initial reading.
    pub fn reset_clock(&mut self) -> Result<(), ScoreboardError> {
        self.clock_mut()?.reset();
        Ok(())
    }

    /// One-second step of the clock, if this sport has one and it is running.
    pub fn tick(&mut self) -> Option<ClockTime> {
        self.game.clock_mut().and_then(MatchClock::tick)
    }

    /// Stats recomputed from the current event log.
    pub fn stats(&self) -> MatchStats {
        match_stats(&self.setup, self.events())
    }
}
