//! Scoring rules. Scores never go below zero.
//!
//! The time bonus (`remaining / divisor`) is always computable but is only
//! added to the score when `apply_time_bonus` is set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreRules {
    /// Flat award for a correct order.
    pub correct_points: u32,
    /// Deducted for a wrong order (clamped at zero).
    pub wrong_penalty: u32,
    /// Seconds of remaining time per bonus point. Zero disables the bonus.
    pub time_bonus_divisor: u32,
    pub apply_time_bonus: bool,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            correct_points: 10,
            wrong_penalty: 50,
            time_bonus_divisor: 10,
            apply_time_bonus: false,
        }
    }
}

impl ScoreRules {
    pub fn time_bonus(&self, remaining_seconds: u32) -> u32 {
        remaining_seconds
            .checked_div(self.time_bonus_divisor)
            .unwrap_or(0)
    }

    /// Points gained by a correct submission with `remaining_seconds` left.
    pub fn award(&self, remaining_seconds: u32) -> u32 {
        let bonus = if self.apply_time_bonus {
            self.time_bonus(remaining_seconds)
        } else {
            0
        };
        self.correct_points.saturating_add(bonus)
    }

    /// Score after a correct submission.
    pub fn after_correct(&self, score: u32, remaining_seconds: u32) -> u32 {
        score.saturating_add(self.award(remaining_seconds))
    }

    /// Score after a wrong submission.
    pub fn after_wrong(&self, score: u32) -> u32 {
        score.saturating_sub(self.wrong_penalty)
    }
}
