//! StepFlow Headless Session Harness
//!
//! Validates content and drives scripted sessions through the engine.
//! Runs entirely in-process with no UI and no wall clock.
//!
//! Usage:
//!   cargo run -p stepflow-simtest
//!   cargo run -p stepflow-simtest -- --verbose
//!   cargo run -p stepflow-simtest -- --content path/to/content.json --seed 7

use std::collections::HashSet;
use std::fs::File;

use rand::rngs::StdRng;
use stepflow_core::prelude::*;
use stepflow_logic::selector::{eligible_puzzles, select_puzzle};
use tracing_subscriber::EnvFilter;

// ── Bundled content (same JSON the game ships) ──────────────────────────
const CONTENT_JSON: &str = include_str!("../../../data/content.json");

const DEFAULT_SEED: u64 = 42;
const RUNS_PER_DOMAIN: u64 = 20;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

struct Args {
    verbose: bool,
    content_path: Option<String>,
    seed: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };
    Args {
        verbose: args.iter().any(|a| a == "--verbose"),
        content_path: value_of("--content"),
        seed: value_of("--seed")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED),
    }
}

fn main() {
    let args = parse_args();
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== StepFlow Session Harness ===\n");

    let mut results = Vec::new();

    // 1. Content loading
    let content = match load_content(&args) {
        Ok(c) => {
            results.push(TestResult::check(
                "content_load",
                true,
                format!("{} domains loaded", c.catalog.domains().len()),
            ));
            c
        }
        Err(e) => {
            results.push(TestResult::check("content_load", false, e.to_string()));
            finish(&results, args.verbose);
            return;
        }
    };

    // 2. Content sanity
    results.extend(validate_content(&content));

    // 3. Selector pools
    results.extend(validate_pools(&content, args.seed));

    // 4. Winning playthroughs
    results.extend(validate_win_runs(&content, args.seed));

    // 5. Wrong submission
    results.extend(validate_wrong_order(&content, args.seed));

    // 6. Timeout
    results.extend(validate_timeout(&content, args.seed));

    // 7. Reset
    results.extend(validate_reset(&content, args.seed));

    finish(&results, args.verbose);
}

fn load_content(args: &Args) -> Result<Content, ContentError> {
    match &args.content_path {
        Some(path) => {
            let file = File::open(path).map_err(serde_json::Error::io)?;
            Content::from_reader(file)
        }
        None => Content::from_json(CONTENT_JSON),
    }
}

fn finish(results: &[TestResult], verbose: bool) {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Session helpers ─────────────────────────────────────────────────────

fn new_engine(content: &Content, seed: u64) -> GameEngine<StdRng> {
    GameEngine::seeded(content.clone(), seed)
}

/// Place steps in the given order, then submit.
fn submit_order(engine: &mut GameEngine<StdRng>, ids: &[String]) -> SubmitOutcome {
    for id in ids {
        if let Err(e) = engine.move_step(id, Area::Unarranged, Area::Arranged) {
            log::warn!("move {} failed: {}", id, e);
        }
    }
    engine.submit_solution()
}

fn current_ids(engine: &GameEngine<StdRng>, correct: bool) -> Vec<String> {
    match engine.session().current_puzzle.as_ref() {
        Some(p) if correct => p.correct_steps.iter().map(|s| s.id.clone()).collect(),
        Some(p) => p.shuffled_steps.iter().map(|s| s.id.clone()).collect(),
        None => Vec::new(),
    }
}

// ── 2. Content sanity ───────────────────────────────────────────────────

fn validate_content(content: &Content) -> Vec<TestResult> {
    println!("--- Content ---");
    let mut results = Vec::new();

    results.push(TestResult::check(
        "content_has_domains",
        !content.catalog.is_empty(),
        format!("domains: {}", content.catalog.domain_names().join(", ")),
    ));

    let needed = content
        .levels
        .total_stages_to_win()
        .map_or_else(|| "too many".to_string(), |n| n.to_string());
    for domain in content.catalog.domains() {
        results.push(TestResult::check(
            format!("{}_stage_budget", domain.name),
            content.levels.validate_for(domain.stage_count()).is_ok(),
            format!("{} stages, {} needed to win", domain.stage_count(), needed),
        ));

        let presolved: Vec<&str> = domain
            .stages
            .iter()
            .flat_map(|s| s.puzzles.iter())
            .filter(|p| p.shuffled_steps == p.correct_steps)
            .map(|p| p.id.as_str())
            .collect();
        results.push(TestResult::check(
            format!("{}_not_presolved", domain.name),
            presolved.is_empty(),
            if presolved.is_empty() {
                "every puzzle starts shuffled".to_string()
            } else {
                format!("already in order: {}", presolved.join(", "))
            },
        ));
    }
    results
}

// ── 3. Selector pools ───────────────────────────────────────────────────

fn validate_pools(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Puzzle pools ---");
    let mut results = Vec::new();
    let mut rng: StdRng = rand::SeedableRng::seed_from_u64(seed);

    for domain in content.catalog.domains() {
        for level in 1..=content.levels.levels_to_win() {
            let pool = eligible_puzzles(domain, &content.levels, level, &HashSet::new()).len();
            let mut completed = HashSet::new();
            while let Some(p) =
                select_puzzle(domain, &content.levels, level, &completed, &mut rng)
            {
                completed.insert(p.id.clone());
                if completed.len() > pool {
                    break;
                }
            }
            results.push(TestResult::check(
                format!("{}_level{}_pool", domain.name, level),
                pool > 0 && completed.len() == pool,
                format!("{} puzzles drawn of {}", completed.len(), pool),
            ));
        }
    }
    results
}

// ── 4. Winning playthroughs ─────────────────────────────────────────────

fn validate_win_runs(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Winning runs ---");
    let mut results = Vec::new();
    let rules = content.config.score_rules;

    for name in content.catalog.domain_names() {
        let mut failures = Vec::new();
        let mut total_puzzles = 0;

        for run in 0..RUNS_PER_DOMAIN {
            let mut engine = new_engine(content, seed.wrapping_add(run));
            if let Err(e) = engine.start_game(name) {
                failures.push(format!("run {}: {}", run, e));
                continue;
            }
            let mut seen = HashSet::new();
            while engine.phase() == GamePhase::Playing {
                if let Some(id) = engine.current_puzzle_id() {
                    if !seen.insert(id.to_string()) {
                        failures.push(format!("run {}: repeated {}", run, id));
                    }
                }
                let ids = current_ids(&engine, true);
                submit_order(&mut engine, &ids);
            }
            if engine.phase() != GamePhase::Completed {
                failures.push(format!("run {}: ended in {:?}", run, engine.phase()));
            }
            let expected = engine.total_puzzles_completed() * rules.correct_points;
            if !rules.apply_time_bonus && engine.score() != expected {
                failures.push(format!(
                    "run {}: score {} expected {}",
                    run,
                    engine.score(),
                    expected
                ));
            }
            total_puzzles += engine.total_puzzles_completed();
        }

        results.push(TestResult::check(
            format!("{}_win_runs", name),
            failures.is_empty(),
            if failures.is_empty() {
                format!(
                    "{} runs won, {:.1} puzzles per run",
                    RUNS_PER_DOMAIN,
                    total_puzzles as f64 / RUNS_PER_DOMAIN as f64
                )
            } else {
                failures.join("; ")
            },
        ));
    }
    results
}

// ── 5. Wrong submission ─────────────────────────────────────────────────

fn validate_wrong_order(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Wrong order ---");
    let mut results = Vec::new();
    let Some(name) = content.catalog.domain_names().first().map(|s| s.to_string()) else {
        return results;
    };

    let mut engine = new_engine(content, seed);
    let started = engine.start_game(&name).is_ok();
    let ids = current_ids(&engine, false);
    let outcome = submit_order(&mut engine, &ids);

    results.push(TestResult::check(
        "wrong_order_ends_session",
        started && outcome == SubmitOutcome::Incorrect && engine.phase() == GamePhase::Menu,
        format!("outcome {:?}, phase {:?}", outcome, engine.phase()),
    ));
    results.push(TestResult::check(
        "wrong_order_score_clamped",
        engine.score() == 0,
        format!("score {}", engine.score()),
    ));
    results
}

// ── 6. Timeout ──────────────────────────────────────────────────────────

fn validate_timeout(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Timeout ---");
    let mut results = Vec::new();
    let Some(name) = content.catalog.domain_names().first().map(|s| s.to_string()) else {
        return results;
    };

    let mut engine = new_engine(content, seed);
    if let Err(e) = engine.start_game(&name) {
        results.push(TestResult::check("timeout_start", false, e.to_string()));
        return results;
    }
    let seconds = content.config.puzzle_time_seconds;

    let mut timed_out_at = None;
    for t in 1..=seconds {
        if engine.tick() == TickOutcome::TimedOut {
            timed_out_at = Some(t);
            break;
        }
    }
    let after = engine.tick();

    results.push(TestResult::check(
        "timeout_fires_on_last_tick",
        timed_out_at == Some(seconds) && engine.phase() == GamePhase::Menu,
        format!("timed out at {:?} of {}", timed_out_at, seconds),
    ));
    results.push(TestResult::check(
        "timeout_fires_once",
        after == TickOutcome::Idle && engine.time_remaining() == 0,
        format!("next tick {:?}, remaining {}", after, engine.time_remaining()),
    ));
    results
}

// ── 7. Reset ────────────────────────────────────────────────────────────

fn validate_reset(content: &Content, seed: u64) -> Vec<TestResult> {
    println!("--- Reset ---");
    let mut results = Vec::new();
    let Some(name) = content.catalog.domain_names().first().map(|s| s.to_string()) else {
        return results;
    };

    let mut engine = new_engine(content, seed);
    if let Err(e) = engine.start_game(&name) {
        results.push(TestResult::check("reset_start", false, e.to_string()));
        return results;
    }
    let ids = current_ids(&engine, true);
    submit_order(&mut engine, &ids);
    engine.tick();
    engine.reset_game();

    let view = engine.view();
    let clean = view.phase == GamePhase::Menu
        && view.score == 0
        && view.current_level == 1
        && view.total_puzzles_completed == 0
        && view.stages_completed_in_level == 0
        && view.current_question.is_none()
        && view.last_notification.is_none()
        && engine.completed_puzzle_ids().is_empty();
    results.push(TestResult::check(
        "reset_restores_initial_state",
        clean,
        serde_json::to_string(&view).unwrap_or_default(),
    ));
    results.push(TestResult::check(
        "reset_cancels_timer",
        engine.tick() == TickOutcome::Idle,
        "tick after reset is inert",
    ));
    results
}
