//! Level configuration: how many distinct stages each level requires.
//!
//! Levels are 1-indexed and map onto contiguous, non-overlapping slices of a
//! domain's stage list: level N covers the stages after those claimed by
//! levels 1..N-1, and claims `required(N)` of them.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key prefix used by the content document (`"Level1"`, `"Level2"`, ...).
pub const LEVEL_KEY_PREFIX: &str = "Level";

/// Required distinct stage count per level plus the number of levels to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    levels_to_win: u32,
    required: BTreeMap<u32, u32>,
}

impl LevelConfig {
    /// Build from already-numbered entries. Not validated; see [`Self::validate`].
    pub fn new(levels_to_win: u32, required: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            levels_to_win,
            required: required.into_iter().collect(),
        }
    }

    /// Parse `"Level<N>"` keyed entries as found in the content document.
    pub fn from_keyed(
        levels_to_win: u32,
        entries: &BTreeMap<String, u32>,
    ) -> Result<Self, LevelConfigError> {
        let mut required = BTreeMap::new();
        for (key, &count) in entries {
            let level = key
                .strip_prefix(LEVEL_KEY_PREFIX)
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|&n| n > 0)
                .ok_or_else(|| LevelConfigError::MalformedKey(key.clone()))?;
            required.insert(level, count);
        }
        Ok(Self {
            levels_to_win,
            required,
        })
    }

    pub fn levels_to_win(&self) -> u32 {
        self.levels_to_win
    }

    /// Distinct stages needed to clear `level`.
    pub fn required(&self, level: u32) -> Option<u32> {
        self.required.get(&level).copied()
    }

    /// Sum of required stages over every winning level. `None` if the sum
    /// does not fit in `usize`.
    pub fn total_stages_to_win(&self) -> Option<usize> {
        (1..=self.levels_to_win)
            .filter_map(|l| self.required(l))
            .try_fold(0usize, |acc, n| acc.checked_add(n as usize))
    }

    /// Half-open stage index range for `level`. `None` when the level has
    /// no entry, or a prior level is missing.
    pub fn stage_range(&self, level: u32) -> Option<Range<usize>> {
        if level == 0 {
            return None;
        }
        let mut start = 0usize;
        for prior in 1..level {
            start = start.checked_add(self.required(prior)? as usize)?;
        }
        let len = self.required(level)? as usize;
        Some(start..start.checked_add(len)?)
    }

    /// Every level 1..=levels_to_win has a positive entry.
    pub fn validate(&self) -> Result<(), LevelConfigError> {
        if self.levels_to_win == 0 {
            return Err(LevelConfigError::NoLevels);
        }
        for level in 1..=self.levels_to_win {
            match self.required(level) {
                None => return Err(LevelConfigError::MissingLevel(level)),
                Some(0) => return Err(LevelConfigError::ZeroStages(level)),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// [`Self::validate`], plus the domain must have enough stages to
    /// cover every level's slice.
    pub fn validate_for(&self, stage_count: usize) -> Result<(), LevelConfigError> {
        self.validate()?;
        let needed = self
            .total_stages_to_win()
            .ok_or(LevelConfigError::StageCountOverflow)?;
        if needed > stage_count {
            return Err(LevelConfigError::NotEnoughStages {
                needed,
                available: stage_count,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelConfigError {
    #[error("levelsToWin must be at least 1")]
    NoLevels,

    #[error("missing stage count for level {0}")]
    MissingLevel(u32),

    #[error("level {0} requires zero stages")]
    ZeroStages(u32),

    #[error("malformed level key {0:?} (expected Level<N>)")]
    MalformedKey(String),

    #[error("levels need {needed} stages but the domain has {available}")]
    NotEnoughStages { needed: usize, available: usize },

    #[error("total stage count across levels overflows")]
    StageCountOverflow,
}
