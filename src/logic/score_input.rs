//! Bounded integer stepper with a direct-entry path.

use crate::models::ScoreboardError;
use serde::Serialize;

/// Stepper over `[min, max]`. Steps are clamped to the range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ScoreInput {
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl ScoreInput {
    /// Stepper at `value`; the caller keeps it inside `[min, max]`.
    pub fn new(value: i64, min: i64, max: i64, step: i64) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    /// False only at the upper bound.
    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    /// False only at the lower bound.
    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    /// Step up, stopping at `max`. Returns false when already there.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.value = self.value.saturating_add(self.step).min(self.max);
        true
    }

    /// Step down, stopping at `min`. Returns false when already there.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.value = self.value.saturating_sub(self.step).max(self.min);
        true
    }

    /// Direct entry of a number. Out-of-range values are rejected and the value is kept.
    pub fn commit(&mut self, n: i64) -> Result<i64, ScoreboardError> {
        if n < self.min || n > self.max {
            return Err(ScoreboardError::OutOfRange {
                value: n,
                min: self.min,
                max: self.max,
            });
        }
        self.value = n;
        Ok(n)
    }

    /// Direct entry of typed text, as from the entry dialog.
    pub fn commit_text(&mut self, text: &str) -> Result<i64, ScoreboardError> {
        let n: i64 = text
            .trim()
            .parse()
            .map_err(|_| ScoreboardError::NotANumber(text.to_string()))?;
        self.commit(n)
    }
}
