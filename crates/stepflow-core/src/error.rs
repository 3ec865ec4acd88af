//! Error types for content loading and engine commands.
//!
//! Gameplay outcomes (wrong order, timeout, exhausted pool) are not errors;
//! they are reported through [`crate::engine::SubmitOutcome`],
//! [`crate::engine::TickOutcome`] and notifications.

use thiserror::Error;

use stepflow_logic::arrangement::MoveError;
use stepflow_logic::catalog::CatalogError;
use stepflow_logic::levels::LevelConfigError;

use crate::session::GamePhase;

/// Failure to turn a content document into a playable catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid level configuration: {0}")]
    Levels(#[from] LevelConfigError),

    #[error("puzzleTimeSeconds must be at least 1")]
    ZeroPuzzleTime,
}

/// A command the engine refused. State is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("domain {0} has no stages")]
    EmptyDomain(String),

    #[error("cannot start domain {domain}: {source}")]
    Levels {
        domain: String,
        #[source]
        source: LevelConfigError,
    },

    #[error("a game can only be started from the menu (currently {0:?})")]
    NotInMenu(GamePhase),

    #[error("no puzzle is in play")]
    NotPlaying,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}
