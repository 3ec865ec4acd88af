//! Puzzle selection. Picks a not-yet-completed puzzle from the stages that
//! belong to the current level.
//!
//! Randomness is injected by the caller so selection is reproducible under a
//! seeded RNG.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Domain, Puzzle};
use crate::levels::LevelConfig;

/// Every puzzle in `level`'s stage slice whose id is not in `completed`,
/// in catalog order. Empty when the level has no range or the pool is used up.
pub fn eligible_puzzles<'a>(
    domain: &'a Domain,
    levels: &LevelConfig,
    level: u32,
    completed: &HashSet<String>,
) -> Vec<&'a Puzzle> {
    let Some(range) = levels.stage_range(level) else {
        return Vec::new();
    };
    let end = range.end.min(domain.stages.len());
    let start = range.start.min(end);

    domain.stages[start..end]
        .iter()
        .flat_map(|stage| stage.puzzles.iter())
        .filter(|puzzle| !completed.contains(&puzzle.id))
        .collect()
}

/// Choose uniformly among [`eligible_puzzles`]. `None` signals that the
/// level's pool is exhausted.
pub fn select_puzzle<'a, R: Rng + ?Sized>(
    domain: &'a Domain,
    levels: &LevelConfig,
    level: u32,
    completed: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Puzzle> {
    eligible_puzzles(domain, levels, level, completed)
        .choose(rng)
        .copied()
}
