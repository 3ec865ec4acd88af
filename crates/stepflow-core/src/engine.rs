//! Progression engine - the Menu / Playing / Completed state machine.
//!
//! Every command takes `&mut self` and runs to completion, so transitions
//! never interleave. The engine owns no clock: a host scheduler calls
//! [`GameEngine::tick`] once per second. Commands are resolved in the order
//! the host delivers them. A submit delivered before a tick in the same
//! second is resolved first, and the tick then counts down the freshly armed
//! timer of the next puzzle (or is inert if the session ended). A reset
//! delivered before a tick leaves nothing for the tick to do.

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use stepflow_logic::arrangement::Area;
use stepflow_logic::catalog::{Catalog, Step};
use stepflow_logic::countdown::TickResult;
use stepflow_logic::levels::LevelConfig;
use stepflow_logic::selector::select_puzzle;
use stepflow_logic::validator::{first_mismatch, validate_order};

use crate::config::GameConfig;
use crate::content::Content;
use crate::error::EngineError;
use crate::notify::{Notification, Notifier};
use crate::session::{GamePhase, SessionState};

/// Result of [`GameEngine::submit_solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Not playing, or the arrangement is not complete yet. Nothing changed.
    Ignored,
    /// Correct; the next puzzle of the same level is loaded.
    Correct { points: u32 },
    /// Correct and the level was cleared; the first puzzle of `level` is loaded.
    LevelUp { level: u32 },
    /// Correct and the last level was cleared.
    Won,
    /// Correct, but no puzzle is left for the current level. Back to the menu.
    PoolExhausted,
    /// Wrong order. Penalty applied, back to the menu.
    Incorrect,
}

/// Result of [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Idle,
    Running { remaining: u32 },
    TimedOut,
}

/// Host-facing command set, for drivers that queue input as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    StartGame { domain: String },
    MoveStep { step_id: String, from: Area, to: Area },
    SubmitSolution,
    ResetGame,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Started,
    Moved,
    Submitted(SubmitOutcome),
    Reset,
    Ticked(TickOutcome),
}

/// Serializable snapshot of everything the presentation layer observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub phase: GamePhase,
    pub domain: Option<String>,
    pub score: u32,
    pub current_level: u32,
    pub levels_to_win: u32,
    pub time_remaining: u32,
    pub current_question: Option<String>,
    pub unarranged: Vec<Step>,
    pub arranged: Vec<Step>,
    pub can_submit: bool,
    pub total_puzzles_completed: u32,
    pub stages_completed_in_level: usize,
    pub stages_required_in_level: Option<u32>,
    pub last_notification: Option<Notification>,
}

/// The game engine. Generic over the RNG so tests can seed selection.
pub struct GameEngine<R: Rng = StdRng> {
    catalog: Catalog,
    levels: LevelConfig,
    config: GameConfig,
    rng: R,
    session: SessionState,
    notifier: Notifier,
}

impl GameEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn from_content(content: Content) -> Self {
        Self::with_rng(content, StdRng::from_entropy())
    }

    /// Engine with reproducible puzzle selection.
    pub fn seeded(content: Content, seed: u64) -> Self {
        Self::with_rng(content, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(catalog: Catalog, levels: LevelConfig, config: GameConfig, rng: R) -> Self {
        Self {
            catalog,
            levels,
            config,
            rng,
            session: SessionState::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn with_rng(content: Content, rng: R) -> Self {
        Self::new(content.catalog, content.levels, content.config, rng)
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Menu → Playing. Fails fast on an unknown or unplayable domain.
    ///
    /// If the first level has no puzzles at all the session drops straight
    /// back to the menu with a pool-exhausted notification.
    pub fn start_game(&mut self, domain_name: &str) -> Result<(), EngineError> {
        if self.session.phase != GamePhase::Menu {
            warn!("start_game({}) refused in {:?}", domain_name, self.session.phase);
            return Err(EngineError::NotInMenu(self.session.phase));
        }
        let domain = self
            .catalog
            .domain(domain_name)
            .ok_or_else(|| EngineError::UnknownDomain(domain_name.to_string()))?;
        if domain.stages.is_empty() {
            return Err(EngineError::EmptyDomain(domain_name.to_string()));
        }
        self.levels
            .validate_for(domain.stage_count())
            .map_err(|source| EngineError::Levels {
                domain: domain_name.to_string(),
                source,
            })?;

        self.session = SessionState::started(domain_name);
        self.notifier.clear();
        info!(
            "Game started: domain={} levels={} stages_to_win={:?}",
            domain_name,
            self.levels.levels_to_win(),
            self.levels.total_stages_to_win()
        );
        self.load_next_puzzle();
        Ok(())
    }

    /// Move one step between the two areas of the board.
    pub fn move_step(&mut self, step_id: &str, from: Area, to: Area) -> Result<(), EngineError> {
        if self.session.phase != GamePhase::Playing || self.session.current_puzzle.is_none() {
            return Err(EngineError::NotPlaying);
        }
        self.session.arrangement.move_step(step_id, from, to)?;
        debug!("Moved step {} {:?} -> {:?}", step_id, from, to);
        Ok(())
    }

    /// Whether [`Self::submit_solution`] would be evaluated right now.
    pub fn can_submit(&self) -> bool {
        self.session.phase == GamePhase::Playing
            && self
                .session
                .current_puzzle
                .as_ref()
                .is_some_and(|p| self.session.arrangement.is_complete(p.step_count()))
    }

    /// Check the arranged order and advance, level up, win, or end the session.
    pub fn submit_solution(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            debug!("Submit ignored: arrangement incomplete or not playing");
            return SubmitOutcome::Ignored;
        }
        let Some(puzzle) = self.session.current_puzzle.as_ref() else {
            return SubmitOutcome::Ignored;
        };

        if !validate_order(self.session.arrangement.arranged(), &puzzle.correct_steps) {
            let penalty = self.config.score_rules.wrong_penalty;
            self.session.score = self.config.score_rules.after_wrong(self.session.score);
            info!(
                "Wrong order on puzzle {} (first misplaced at {:?}); score now {}. Session over.",
                puzzle.id,
                first_mismatch(self.session.arrangement.arranged(), &puzzle.correct_steps),
                self.session.score
            );
            self.notifier.emit(Notification::incorrect(penalty));
            self.session.end_in(GamePhase::Menu);
            return SubmitOutcome::Incorrect;
        }

        let puzzle_id = puzzle.id.clone();
        let stage_id = puzzle.stage_id.clone();
        let rules = self.config.score_rules;
        let remaining = self.session.time_remaining();
        let points = rules.award(remaining);

        self.session.countdown.disarm();
        self.session.score = rules.after_correct(self.session.score, remaining);
        self.session.total_puzzles_completed += 1;
        self.session.completed_puzzle_ids.insert(puzzle_id.clone());
        self.session.completed_stage_ids_in_level.insert(stage_id);

        let level = self.session.current_level;
        let Some(required) = self.levels.required(level) else {
            warn!("Level {} has no stage requirement; ending session", level);
            self.notifier.emit(Notification::pool_exhausted(level));
            self.session.end_in(GamePhase::Menu);
            return SubmitOutcome::PoolExhausted;
        };
        let required = required as usize;
        let cleared = self.session.completed_stage_ids_in_level.len();
        debug!(
            "Solved {} (+{}): level {} stages {}/{}",
            puzzle_id, points, level, cleared, required
        );

        if cleared < required {
            self.notifier.emit(Notification::correct(points));
            return if self.load_next_puzzle() {
                SubmitOutcome::Correct { points }
            } else {
                SubmitOutcome::PoolExhausted
            };
        }

        if level >= self.levels.levels_to_win() {
            info!(
                "All {} levels cleared. Final score {}",
                level, self.session.score
            );
            self.notifier.emit(Notification::win(self.session.score));
            self.session.end_in(GamePhase::Completed);
            return SubmitOutcome::Won;
        }

        self.session.current_level += 1;
        self.session.completed_stage_ids_in_level.clear();
        let next = self.session.current_level;
        info!("Level up: {} -> {} (score {})", level, next, self.session.score);
        self.notifier.emit(Notification::level_up(next));
        if self.load_next_puzzle() {
            SubmitOutcome::LevelUp { level: next }
        } else {
            SubmitOutcome::PoolExhausted
        }
    }

    /// Back to a pristine menu from any phase.
    pub fn reset_game(&mut self) {
        if self.session.phase != GamePhase::Menu {
            info!("Game reset from {:?}", self.session.phase);
        }
        self.session = SessionState::new();
        self.notifier.clear();
    }

    /// One second of countdown. Inert unless a puzzle is in play.
    pub fn tick(&mut self) -> TickOutcome {
        if self.session.phase != GamePhase::Playing {
            return TickOutcome::Idle;
        }
        match self.session.countdown.tick() {
            TickResult::Idle => TickOutcome::Idle,
            TickResult::Running { remaining } => TickOutcome::Running { remaining },
            TickResult::Expired => {
                info!(
                    "Timer expired on level {} (score {}). Session over.",
                    self.session.current_level, self.session.score
                );
                self.notifier.emit(Notification::timeout());
                self.session.end_in(GamePhase::Menu);
                TickOutcome::TimedOut
            }
        }
    }

    /// Dispatch a queued [`Command`].
    pub fn handle(&mut self, command: Command) -> Result<CommandOutcome, EngineError> {
        match command {
            Command::StartGame { domain } => {
                self.start_game(&domain).map(|_| CommandOutcome::Started)
            }
            Command::MoveStep { step_id, from, to } => {
                self.move_step(&step_id, from, to).map(|_| CommandOutcome::Moved)
            }
            Command::SubmitSolution => Ok(CommandOutcome::Submitted(self.submit_solution())),
            Command::ResetGame => {
                self.reset_game();
                Ok(CommandOutcome::Reset)
            }
            Command::Tick => Ok(CommandOutcome::Ticked(self.tick())),
        }
    }

    /// Select and install the next puzzle for the current level. Returns
    /// `false` (and ends the session) when the level's pool is exhausted.
    fn load_next_puzzle(&mut self) -> bool {
        let level = self.session.current_level;
        let picked = self
            .session
            .domain
            .as_deref()
            .and_then(|name| self.catalog.domain(name))
            .and_then(|domain| {
                select_puzzle(
                    domain,
                    &self.levels,
                    level,
                    &self.session.completed_puzzle_ids,
                    &mut self.rng,
                )
            })
            .cloned();

        match picked {
            Some(puzzle) => {
                debug!(
                    "Loaded puzzle {} (stage {}, level {}, {} steps)",
                    puzzle.id,
                    puzzle.stage_id,
                    level,
                    puzzle.step_count()
                );
                self.session
                    .install_puzzle(puzzle, self.config.puzzle_time_seconds);
                true
            }
            None => {
                warn!(
                    "No puzzles left for level {} ({} stages cleared). Session over.",
                    level,
                    self.session.completed_stage_ids_in_level.len()
                );
                self.notifier.emit(Notification::pool_exhausted(level));
                self.session.end_in(GamePhase::Menu);
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Observations
    // ------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn current_level(&self) -> u32 {
        self.session.current_level
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining()
    }

    pub fn current_question(&self) -> Option<&str> {
        self.session
            .current_puzzle
            .as_ref()
            .map(|p| p.question.as_str())
    }

    pub fn current_puzzle_id(&self) -> Option<&str> {
        self.session.current_puzzle.as_ref().map(|p| p.id.as_str())
    }

    pub fn unarranged(&self) -> &[Step] {
        self.session.arrangement.unarranged()
    }

    pub fn arranged(&self) -> &[Step] {
        self.session.arrangement.arranged()
    }

    pub fn total_puzzles_completed(&self) -> u32 {
        self.session.total_puzzles_completed
    }

    pub fn stages_completed_in_level(&self) -> usize {
        self.session.completed_stage_ids_in_level.len()
    }

    pub fn completed_puzzle_ids(&self) -> &HashSet<String> {
        &self.session.completed_puzzle_ids
    }

    /// Cleared / required distinct stages for the current level.
    pub fn level_progress(&self) -> (usize, Option<u32>) {
        (
            self.stages_completed_in_level(),
            self.levels.required(self.session.current_level),
        )
    }

    pub fn puzzle_generation(&self) -> u64 {
        self.session.puzzle_generation
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifier.last()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn view(&self) -> SessionView {
        let (stages_completed_in_level, stages_required_in_level) = self.level_progress();
        SessionView {
            phase: self.session.phase,
            domain: self.session.domain.clone(),
            score: self.session.score,
            current_level: self.session.current_level,
            levels_to_win: self.levels.levels_to_win(),
            time_remaining: self.time_remaining(),
            current_question: self.current_question().map(str::to_string),
            unarranged: self.unarranged().to_vec(),
            arranged: self.arranged().to_vec(),
            can_submit: self.can_submit(),
            total_puzzles_completed: self.session.total_puzzles_completed,
            stages_completed_in_level,
            stages_required_in_level,
            last_notification: self.notifier.last().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use stepflow_logic::catalog::{Domain, Puzzle, Stage, StepPhase};
    use stepflow_logic::scoring::ScoreRules;

    fn puzzle(id: &str) -> Puzzle {
        let correct = vec![
            Step::new(format!("{}-open", id), "Open", StepPhase::Initiation),
            Step::new(format!("{}-run", id), "Run", StepPhase::Execution),
            Step::new(format!("{}-close", id), "Close", StepPhase::Settlement),
        ];
        let shuffled = vec![correct[2].clone(), correct[0].clone(), correct[1].clone()];
        Puzzle {
            id: id.into(),
            question: format!("Order the {} workflow", id),
            stage_id: String::new(),
            correct_steps: correct,
            shuffled_steps: shuffled,
        }
    }

    fn stage(id: &str, puzzles: &[&str]) -> Stage {
        Stage {
            id: id.into(),
            puzzles: puzzles.iter().map(|p| puzzle(p)).collect(),
        }
    }

    fn engine(stages: Vec<Stage>, levels: LevelConfig, seconds: u32) -> GameEngine<StdRng> {
        let catalog = Catalog::new(vec![Domain {
            name: "Payments".into(),
            stages,
        }])
        .unwrap();
        let config = GameConfig {
            puzzle_time_seconds: seconds,
            score_rules: ScoreRules::default(),
        };
        GameEngine::new(catalog, levels, config, StdRng::seed_from_u64(42))
    }

    fn arrange(engine: &mut GameEngine<StdRng>, ids: &[String]) {
        for id in ids {
            engine.move_step(id, Area::Unarranged, Area::Arranged).unwrap();
        }
    }

    fn solve(engine: &mut GameEngine<StdRng>) -> SubmitOutcome {
        let id = engine.current_puzzle_id().unwrap().to_string();
        let ids: Vec<String> = ["open", "run", "close"]
            .iter()
            .map(|s| format!("{}-{}", id, s))
            .collect();
        arrange(engine, &ids);
        engine.submit_solution()
    }

    #[test]
    fn test_start_loads_first_puzzle() {
        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        e.start_game("Payments").unwrap();
        assert_eq!(e.phase(), GamePhase::Playing);
        assert_eq!(e.current_puzzle_id(), Some("p1"));
        assert_eq!(e.unarranged().len(), 3);
        assert!(e.arranged().is_empty());
        assert_eq!(e.time_remaining(), 30);
        assert_eq!(e.puzzle_generation(), 1);
    }

    #[test]
    fn test_start_rejections() {
        let mut e = engine(vec![], LevelConfig::new(1, [(1, 1)]), 30);
        assert!(matches!(
            e.start_game("Payments"),
            Err(EngineError::EmptyDomain(_))
        ));
        assert!(matches!(
            e.start_game("Lending"),
            Err(EngineError::UnknownDomain(_))
        ));

        let mut e = engine(
            vec![stage("s1", &["p1"]), stage("s2", &["p2"])],
            LevelConfig::new(2, [(1, 1)]),
            30,
        );
        assert!(matches!(
            e.start_game("Payments"),
            Err(EngineError::Levels { .. })
        ));
        assert_eq!(e.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_start_refused_while_playing() {
        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        e.start_game("Payments").unwrap();
        assert!(matches!(
            e.start_game("Payments"),
            Err(EngineError::NotInMenu(GamePhase::Playing))
        ));
    }

    #[test]
    fn test_submit_ignored_until_complete() {
        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        e.start_game("Payments").unwrap();
        arrange(&mut e, &["p1-open".to_string(), "p1-run".to_string()]);
        assert!(!e.can_submit());
        assert_eq!(e.submit_solution(), SubmitOutcome::Ignored);
        assert_eq!(e.phase(), GamePhase::Playing);
        assert_eq!(e.score(), 0);
        assert!(e.last_notification().is_none());
    }

    #[test]
    fn test_same_stage_twice_counts_once() {
        let mut e = engine(
            vec![stage("s1", &["p1", "p2"]), stage("s2", &["p3"])],
            LevelConfig::new(1, [(1, 2)]),
            30,
        );
        e.start_game("Payments").unwrap();
        // Drive until the level is won; the stage set must never exceed 2.
        let mut outcomes = Vec::new();
        while e.phase() == GamePhase::Playing {
            outcomes.push(solve(&mut e));
            assert!(e.stages_completed_in_level() <= 2);
        }
        assert_eq!(e.phase(), GamePhase::Completed);
        assert_eq!(outcomes.last(), Some(&SubmitOutcome::Won));
        assert!(e.total_puzzles_completed() >= 2);
        assert_eq!(e.score(), 10 * e.total_puzzles_completed());
    }

    #[test]
    fn test_pool_exhausted_after_correct() {
        // Level needs two distinct stages but offers one stage with one puzzle
        // plus an empty stage.
        let mut e = engine(
            vec![stage("s1", &["p1"]), stage("s2", &[])],
            LevelConfig::new(1, [(1, 2)]),
            30,
        );
        e.start_game("Payments").unwrap();
        assert_eq!(solve(&mut e), SubmitOutcome::PoolExhausted);
        assert_eq!(e.phase(), GamePhase::Menu);
        assert_eq!(
            e.last_notification().unwrap().kind,
            NotificationKind::PoolExhausted
        );
        assert_eq!(e.score(), 10);
    }

    #[test]
    fn test_pool_exhausted_at_start() {
        let mut e = engine(
            vec![stage("s1", &[])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        e.start_game("Payments").unwrap();
        assert_eq!(e.phase(), GamePhase::Menu);
        assert_eq!(
            e.last_notification().unwrap().kind,
            NotificationKind::PoolExhausted
        );
    }

    #[test]
    fn test_start_rejects_overflowing_level_counts() {
        let half = 1u32 << 31;
        let mut e = engine(
            vec![stage("s1", &["p1"]), stage("s2", &["p2"])],
            LevelConfig::new(2, [(1, half), (2, half)]),
            30,
        );
        assert!(matches!(
            e.start_game("Payments"),
            Err(EngineError::Levels { .. })
        ));
        assert_eq!(e.phase(), GamePhase::Menu);

        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(2, [(1, 4_000_000_000), (2, 4_000_000_000)]),
            30,
        );
        assert!(e.start_game("Payments").is_err());
        assert_eq!(e.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_missing_level_requirement_ends_session() {
        let mut e = engine(
            vec![stage("s1", &["p1"]), stage("s2", &["p2"])],
            LevelConfig::new(1, [(1, 2)]),
            30,
        );
        e.start_game("Payments").unwrap();
        e.levels = LevelConfig::new(1, std::iter::empty());
        assert_eq!(solve(&mut e), SubmitOutcome::PoolExhausted);
        assert_eq!(e.phase(), GamePhase::Menu);
        assert_eq!(e.stages_completed_in_level(), 1);
        assert_eq!(
            e.last_notification().unwrap().kind,
            NotificationKind::PoolExhausted
        );
    }

    #[test]
    fn test_move_outside_play_rejected() {
        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        assert!(matches!(
            e.move_step("p1-open", Area::Unarranged, Area::Arranged),
            Err(EngineError::NotPlaying)
        ));
        e.start_game("Payments").unwrap();
        assert!(matches!(
            e.move_step("p1-open", Area::Arranged, Area::Unarranged),
            Err(EngineError::Move(_))
        ));
    }

    #[test]
    fn test_time_bonus_applied_when_enabled() {
        let catalog = Catalog::new(vec![Domain {
            name: "Payments".into(),
            stages: vec![stage("s1", &["p1"]), stage("s2", &["p2"])],
        }])
        .unwrap();
        let config = GameConfig {
            puzzle_time_seconds: 45,
            score_rules: ScoreRules {
                apply_time_bonus: true,
                ..ScoreRules::default()
            },
        };
        let mut e = GameEngine::new(
            catalog,
            LevelConfig::new(1, [(1, 2)]),
            config,
            StdRng::seed_from_u64(1),
        );
        e.start_game("Payments").unwrap();
        for _ in 0..5 {
            e.tick();
        }
        // 40 seconds left -> 4 bonus points.
        assert_eq!(solve(&mut e), SubmitOutcome::Correct { points: 14 });
        assert_eq!(e.score(), 14);
    }

    #[test]
    fn test_view_reflects_state() {
        let mut e = engine(
            vec![stage("s1", &["p1"]), stage("s2", &["p2"])],
            LevelConfig::new(2, [(1, 1), (2, 1)]),
            30,
        );
        e.start_game("Payments").unwrap();
        let v = e.view();
        assert_eq!(v.phase, GamePhase::Playing);
        assert_eq!(v.domain.as_deref(), Some("Payments"));
        assert_eq!(v.current_question.as_deref(), Some("Order the p1 workflow"));
        assert_eq!(v.levels_to_win, 2);
        assert_eq!(v.stages_required_in_level, Some(1));
        assert!(!v.can_submit);

        let json = serde_json::to_string(&v).unwrap();
        let back: SessionView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_handle_dispatches_commands() {
        let mut e = engine(
            vec![stage("s1", &["p1"])],
            LevelConfig::new(1, [(1, 1)]),
            30,
        );
        assert_eq!(
            e.handle(Command::StartGame {
                domain: "Payments".into()
            })
            .unwrap(),
            CommandOutcome::Started
        );
        assert_eq!(
            e.handle(Command::Tick).unwrap(),
            CommandOutcome::Ticked(TickOutcome::Running { remaining: 29 })
        );
        for id in ["p1-open", "p1-run", "p1-close"] {
            assert_eq!(
                e.handle(Command::MoveStep {
                    step_id: id.into(),
                    from: Area::Unarranged,
                    to: Area::Arranged,
                })
                .unwrap(),
                CommandOutcome::Moved
            );
        }
        assert_eq!(
            e.handle(Command::SubmitSolution).unwrap(),
            CommandOutcome::Submitted(SubmitOutcome::Won)
        );
        assert_eq!(e.handle(Command::ResetGame).unwrap(), CommandOutcome::Reset);
        assert_eq!(e.phase(), GamePhase::Menu);
    }
}
