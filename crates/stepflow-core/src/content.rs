//! Content resource loading.
//!
//! The content document is a JSON object:
//!
//! ```json
//! {
//!   "puzzleTimeSeconds": 60,
//!   "levelsToWin": 2,
//!   "levelStageConfig": { "Level1": 2, "Level2": 2 },
//!   "scoring": { "applyTimeBonus": false },
//!   "domains": [ { "name": "...", "stages": [ { "id": "...", "puzzles": [...] } ] } ]
//! }
//! ```
//!
//! `scoring` is optional; missing fields fall back to [`ScoreRules::default`].

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use stepflow_logic::catalog::{Catalog, Domain};
use stepflow_logic::levels::LevelConfig;
use stepflow_logic::scoring::ScoreRules;

use crate::config::GameConfig;
use crate::error::ContentError;

/// Raw content document as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub puzzle_time_seconds: u32,
    pub levels_to_win: u32,
    pub level_stage_config: BTreeMap<String, u32>,
    #[serde(default)]
    pub scoring: Option<ScoreRules>,
    pub domains: Vec<Domain>,
}

/// Validated content, ready to hand to the engine.
#[derive(Debug, Clone)]
pub struct Content {
    pub catalog: Catalog,
    pub levels: LevelConfig,
    pub config: GameConfig,
}

impl Content {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        let doc: ContentDocument = serde_json::from_reader(reader)?;
        Self::from_document(doc)
    }

    /// Link, validate, and split a parsed document.
    pub fn from_document(doc: ContentDocument) -> Result<Self, ContentError> {
        if doc.puzzle_time_seconds == 0 {
            return Err(ContentError::ZeroPuzzleTime);
        }
        let levels = LevelConfig::from_keyed(doc.levels_to_win, &doc.level_stage_config)?;
        levels.validate()?;
        let catalog = Catalog::new(doc.domains)?;

        Ok(Self {
            catalog,
            levels,
            config: GameConfig {
                puzzle_time_seconds: doc.puzzle_time_seconds,
                score_rules: doc.scoring.unwrap_or_default(),
            },
        })
    }
}
