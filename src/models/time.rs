//! ClockTime: a mm:ss reading of the match clock.

use crate::models::error::ScoreboardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whole seconds, shown as `mm:ss`. Minutes may run past 59 when counting up.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime(0);

    pub fn from_secs(secs: u32) -> Self {
        ClockTime(secs)
    }

    /// Saturates at the largest representable reading.
    pub fn from_mins(mins: u32) -> Self {
        ClockTime(mins.saturating_mul(60))
    }

    pub fn as_secs(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// One second later.
    pub fn plus_one(self) -> Self {
        ClockTime(self.0.saturating_add(1))
    }

    /// One second earlier, never below 00:00.
    pub fn minus_one(self) -> Self {
        ClockTime(self.0.saturating_sub(1))
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScoreboardError::InvalidTime(s.to_string());
        let (mins, secs) = s.trim().split_once(':').ok_or_else(invalid)?;
        if mins.is_empty() || secs.len() != 2 {
            return Err(invalid());
        }
        let mins: u32 = mins.parse().map_err(|_| invalid())?;
        let secs: u32 = secs.parse().map_err(|_| invalid())?;
        if secs >= 60 {
            return Err(invalid());
        }
        let total = mins
            .checked_mul(60)
            .and_then(|m| m.checked_add(secs))
            .ok_or_else(invalid)?;
        Ok(ClockTime(total))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScoreboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}
