//! StepFlow Core - progression engine for workflow ordering puzzles
//!
//! The player rebuilds a shuffled list of workflow steps in the right order
//! before a per-puzzle timer runs out, clearing levels made of distinct
//! stages within a chosen content domain.
//!
//! # Architecture
//!
//! - **Content**: JSON catalog (domains, stages, puzzles) plus level and
//!   timing configuration, validated at load
//! - **Session**: the single mutable record of score, level, completed sets,
//!   board and timer
//! - **Engine**: the Menu / Playing / Completed state machine; puzzle
//!   selection, validation and scoring rules live in `stepflow-logic`
//!
//! # Example
//!
//! ```rust,no_run
//! use stepflow_core::prelude::*;
//!
//! let json = std::fs::read_to_string("data/content.json").unwrap();
//! let content = Content::from_json(&json).unwrap();
//! let mut engine = GameEngine::from_content(content);
//! engine.start_game("Payments").unwrap();
//!
//! // Host scheduler, once per second:
//! engine.tick();
//! ```

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod notify;
pub mod session;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::GameConfig;
    pub use crate::content::Content;
    pub use crate::engine::{
        Command, CommandOutcome, GameEngine, SessionView, SubmitOutcome, TickOutcome,
    };
    pub use crate::error::{ContentError, EngineError};
    pub use crate::notify::{Notification, NotificationKind, Severity};
    pub use crate::session::{GamePhase, SessionState};
    pub use stepflow_logic::arrangement::Area;
}
