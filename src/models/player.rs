//! Player, PlayerRef and team rosters.

use serde::{Deserialize, Serialize};

/// Identifier of a player, unique within a roster (assigned by the backend).
pub type PlayerId = u64;

/// A roster entry as supplied by match setup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number.
    pub number: u32,
    #[serde(default)]
    pub captain: bool,
}

impl Player {
    /// Non-captain player.
    pub fn new(id: PlayerId, name: impl Into<String>, number: u32) -> Self {
        Self {
            id,
            name: name.into(),
            number,
            captain: false,
        }
    }

    /// Same player marked as team captain.
    pub fn captain(mut self) -> Self {
        self.captain = true;
        self
    }

    /// Snapshot used when attributing an event to this player.
    pub fn to_ref(&self) -> PlayerRef {
        PlayerRef {
            id: self.id,
            name: self.name.clone(),
            number: self.number,
        }
    }
}

/// Copy of the player fields an event needs for display. Events never own roster entries.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
    pub number: u32,
}

/// One team's name and the players eligible for attribution.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSetup {
    pub name: String,
    #[serde(default)]
    pub roster: Vec<Player>,
}

impl TeamSetup {
    /// Team with its roster in display order.
    pub fn new(name: impl Into<String>, roster: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            roster,
        }
    }

    /// Roster entry with `id`.
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }
}
