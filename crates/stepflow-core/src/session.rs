//! Session state: the single mutable record owned by the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stepflow_logic::arrangement::Arrangement;
use stepflow_logic::catalog::Puzzle;
use stepflow_logic::countdown::Countdown;

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Completed,
}

/// Everything that changes during a session.
///
/// After a session ends in the menu (wrong order, timeout, exhausted pool)
/// the score and counters are left in place so the result can be shown;
/// they are cleared by the next start or by a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: GamePhase,
    /// Domain chosen at start, `None` before the first start or after reset.
    pub domain: Option<String>,
    pub score: u32,
    pub current_level: u32,
    pub completed_puzzle_ids: HashSet<String>,
    pub completed_stage_ids_in_level: HashSet<String>,
    pub total_puzzles_completed: u32,
    pub current_puzzle: Option<Puzzle>,
    pub arrangement: Arrangement,
    pub countdown: Countdown,
    /// Bumped on every puzzle load; a host can compare it to detect that
    /// the puzzle (and its timer) was replaced.
    pub puzzle_generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            domain: None,
            score: 0,
            current_level: 1,
            completed_puzzle_ids: HashSet::new(),
            completed_stage_ids_in_level: HashSet::new(),
            total_puzzles_completed: 0,
            current_puzzle: None,
            arrangement: Arrangement::default(),
            countdown: Countdown::idle(),
            puzzle_generation: 0,
        }
    }

    /// Fresh state for a new game in `domain`.
    pub fn started(domain: &str) -> Self {
        Self {
            phase: GamePhase::Playing,
            domain: Some(domain.to_string()),
            ..Self::new()
        }
    }

    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Put `puzzle` on the board with a freshly armed countdown.
    pub fn install_puzzle(&mut self, puzzle: Puzzle, seconds: u32) {
        self.arrangement = Arrangement::new(&puzzle.shuffled_steps);
        self.current_puzzle = Some(puzzle);
        self.countdown = Countdown::start(seconds);
        self.puzzle_generation += 1;
    }

    /// Leave play: clear the board and stop the timer, keep the counters.
    pub fn end_in(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.current_puzzle = None;
        self.arrangement.clear();
        self.countdown.disarm();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
