//! Engine configuration.

use serde::{Deserialize, Serialize};
use stepflow_logic::scoring::ScoreRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Countdown length armed for every puzzle.
    pub puzzle_time_seconds: u32,
    pub score_rules: ScoreRules,
}
