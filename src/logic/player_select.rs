//! Player selection: an open list-picker holding the action waiting for attribution.

use crate::models::{Player, PlayerId, ScoreboardError, Side, TeamSetup};
use serde::Serialize;

/// Open selection over one team's roster. Dropping it discards the pending action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerSelection<A> {
    pub title: String,
    pub description: String,
    pub side: Side,
    pub candidates: Vec<Player>,
    pub pending: A,
}

impl<A> PlayerSelection<A> {
    /// Offer `team`'s roster for `pending`.
    pub fn open(team: &TeamSetup, side: Side, title: impl Into<String>, pending: A) -> Self {
        Self {
            title: title.into(),
            description: format!("Select a player from {}", team.name),
            side,
            candidates: team.roster.clone(),
            pending,
        }
    }

    /// Pick exactly one candidate. On an unknown id the selection stays open.
    pub fn choose(self, player_id: PlayerId) -> Result<(A, Player), (Self, ScoreboardError)> {
        match self.candidates.iter().position(|p| p.id == player_id) {
            Some(idx) => {
                let PlayerSelection {
                    mut candidates,
                    pending,
                    ..
                } = self;
                Ok((pending, candidates.swap_remove(idx)))
            }
            None => Err((self, ScoreboardError::PlayerNotFound(player_id))),
        }
    }
}
