//! Content catalog: Domain → Stage → Puzzle → Step.
//!
//! The catalog is loaded once and never mutated by gameplay. Loading links
//! every puzzle to its owning stage (`Puzzle::stage_id`) and checks the
//! structural invariants the engine relies on: unique ids, non-empty puzzles,
//! and shuffled steps that are a permutation of the canonical order.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// STEPS
// ============================================================================

/// Lifecycle phase a workflow step belongs to. Purely descriptive; ordering
/// is decided by the puzzle's canonical step list, not by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPhase {
    Initiation,
    Execution,
    Settlement,
    #[default]
    #[serde(other)]
    Other,
}

/// One workflow step. Identified by `id`; the other fields are display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phase: StepPhase,
}

impl Step {
    pub fn new(id: impl Into<String>, title: impl Into<String>, phase: StepPhase) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            phase,
        }
    }
}

// ============================================================================
// PUZZLES / STAGES / DOMAINS
// ============================================================================

/// A single ordering puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub question: String,
    /// Owning stage. Filled in by [`Domain::link_stages`]; content may omit it.
    #[serde(default)]
    pub stage_id: String,
    /// Canonical solution order.
    pub correct_steps: Vec<Step>,
    /// Initial presentation order. Always a permutation of `correct_steps`.
    pub shuffled_steps: Vec<Step>,
}

impl Puzzle {
    pub fn step_count(&self) -> usize {
        self.correct_steps.len()
    }

    /// Whether `shuffled_steps` holds exactly the step ids of `correct_steps`.
    pub fn is_permutation(&self) -> bool {
        if self.correct_steps.len() != self.shuffled_steps.len() {
            return false;
        }
        let mut counts: HashMap<&str, i32> = HashMap::new();
        for step in &self.correct_steps {
            *counts.entry(step.id.as_str()).or_default() += 1;
        }
        for step in &self.shuffled_steps {
            *counts.entry(step.id.as_str()).or_default() -= 1;
        }
        counts.values().all(|&c| c == 0)
    }
}

/// A group of puzzles. Its position in the domain decides which level it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub puzzles: Vec<Puzzle>,
}

/// A content domain the player chooses from the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub stages: Vec<Stage>,
}

impl Domain {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn puzzle_count(&self) -> usize {
        self.stages.iter().map(|s| s.puzzles.len()).sum()
    }

    pub fn puzzle(&self, puzzle_id: &str) -> Option<&Puzzle> {
        self.stages
            .iter()
            .flat_map(|s| s.puzzles.iter())
            .find(|p| p.id == puzzle_id)
    }

    /// Record each puzzle's owning stage on the puzzle itself.
    ///
    /// A puzzle that already names a different stage is rejected.
    pub fn link_stages(&mut self) -> Result<(), CatalogError> {
        for stage in &mut self.stages {
            for puzzle in &mut stage.puzzles {
                if puzzle.stage_id.is_empty() {
                    puzzle.stage_id = stage.id.clone();
                } else if puzzle.stage_id != stage.id {
                    return Err(CatalogError::StageMismatch {
                        puzzle: puzzle.id.clone(),
                        declared: puzzle.stage_id.clone(),
                        actual: stage.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check structural invariants. An empty stage list is allowed here;
    /// starting a game on such a domain is refused by the engine instead.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut stage_ids = HashSet::new();
        let mut puzzle_ids = HashSet::new();

        for stage in &self.stages {
            if !stage_ids.insert(stage.id.as_str()) {
                return Err(CatalogError::DuplicateStage {
                    domain: self.name.clone(),
                    stage: stage.id.clone(),
                });
            }
            for puzzle in &stage.puzzles {
                if !puzzle_ids.insert(puzzle.id.as_str()) {
                    return Err(CatalogError::DuplicatePuzzle {
                        domain: self.name.clone(),
                        puzzle: puzzle.id.clone(),
                    });
                }
                if puzzle.correct_steps.is_empty() {
                    return Err(CatalogError::EmptyPuzzle(puzzle.id.clone()));
                }
                let mut step_ids = HashSet::new();
                for step in &puzzle.correct_steps {
                    if !step_ids.insert(step.id.as_str()) {
                        return Err(CatalogError::DuplicateStep {
                            puzzle: puzzle.id.clone(),
                            step: step.id.clone(),
                        });
                    }
                }
                if !puzzle.is_permutation() {
                    return Err(CatalogError::NotAPermutation(puzzle.id.clone()));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable set of domains available to the game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    domains: Vec<Domain>,
}

impl Catalog {
    /// Link and validate every domain.
    pub fn new(mut domains: Vec<Domain>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for domain in &mut domains {
            if !names.insert(domain.name.clone()) {
                return Err(CatalogError::DuplicateDomain(domain.name.clone()));
            }
            domain.link_stages()?;
            domain.validate()?;
        }
        Ok(Self { domains })
    }

    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Domain names in catalog order, for the menu.
    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Structural problems found while loading content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate domain name: {0}")]
    DuplicateDomain(String),

    #[error("duplicate stage id {stage} in domain {domain}")]
    DuplicateStage { domain: String, stage: String },

    #[error("duplicate puzzle id {puzzle} in domain {domain}")]
    DuplicatePuzzle { domain: String, puzzle: String },

    #[error("duplicate step id {step} in puzzle {puzzle}")]
    DuplicateStep { puzzle: String, step: String },

    #[error("puzzle {0} has no steps")]
    EmptyPuzzle(String),

    #[error("puzzle {0}: shuffled steps are not a permutation of the correct steps")]
    NotAPermutation(String),

    #[error("puzzle {puzzle} declares stage {declared} but lives in stage {actual}")]
    StageMismatch {
        puzzle: String,
        declared: String,
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str) -> Step {
        Step::new(id, id.to_uppercase(), StepPhase::Execution)
    }

    fn puzzle(id: &str, correct: &[&str], shuffled: &[&str]) -> Puzzle {
        Puzzle {
            id: id.into(),
            question: format!("Order {}", id),
            stage_id: String::new(),
            correct_steps: correct.iter().map(|s| step(s)).collect(),
            shuffled_steps: shuffled.iter().map(|s| step(s)).collect(),
        }
    }

    fn domain(stages: Vec<Stage>) -> Domain {
        Domain {
            name: "Payments".into(),
            stages,
        }
    }

    #[test]
    fn test_permutation_check() {
        assert!(puzzle("p", &["a", "b", "c"], &["c", "a", "b"]).is_permutation());
        assert!(!puzzle("p", &["a", "b", "c"], &["c", "a"]).is_permutation());
        assert!(!puzzle("p", &["a", "b", "c"], &["c", "a", "a"]).is_permutation());
        assert!(!puzzle("p", &["a", "b"], &["a", "x"]).is_permutation());
    }

    #[test]
    fn test_link_stages_fills_back_reference() {
        let mut d = domain(vec![
            Stage {
                id: "s1".into(),
                puzzles: vec![puzzle("p1", &["a", "b"], &["b", "a"])],
            },
            Stage {
                id: "s2".into(),
                puzzles: vec![puzzle("p2", &["a", "b"], &["b", "a"])],
            },
        ]);
        d.link_stages().unwrap();
        assert_eq!(d.puzzle("p1").unwrap().stage_id, "s1");
        assert_eq!(d.puzzle("p2").unwrap().stage_id, "s2");
    }

    #[test]
    fn test_link_stages_rejects_conflicting_stage() {
        let mut p = puzzle("p1", &["a"], &["a"]);
        p.stage_id = "elsewhere".into();
        let mut d = domain(vec![Stage {
            id: "s1".into(),
            puzzles: vec![p],
        }]);
        assert!(matches!(
            d.link_stages(),
            Err(CatalogError::StageMismatch { .. })
        ));
    }

    #[test]
    fn test_shared_first_step_does_not_confuse_ownership() {
        // Two stages whose puzzles open with the same step id.
        let mut d = domain(vec![
            Stage {
                id: "s1".into(),
                puzzles: vec![puzzle("p1", &["init", "x"], &["x", "init"])],
            },
            Stage {
                id: "s2".into(),
                puzzles: vec![puzzle("p2", &["init", "y"], &["y", "init"])],
            },
        ]);
        d.link_stages().unwrap();
        assert_eq!(d.puzzle("p2").unwrap().stage_id, "s2");
    }

    #[test]
    fn test_validate_rejects_bad_content() {
        let dup = domain(vec![Stage {
            id: "s1".into(),
            puzzles: vec![
                puzzle("p1", &["a"], &["a"]),
                puzzle("p1", &["b"], &["b"]),
            ],
        }]);
        assert!(matches!(
            dup.validate(),
            Err(CatalogError::DuplicatePuzzle { .. })
        ));

        let empty = domain(vec![Stage {
            id: "s1".into(),
            puzzles: vec![puzzle("p1", &[], &[])],
        }]);
        assert_eq!(
            empty.validate(),
            Err(CatalogError::EmptyPuzzle("p1".into()))
        );

        let not_perm = domain(vec![Stage {
            id: "s1".into(),
            puzzles: vec![puzzle("p1", &["a", "b"], &["a", "c"])],
        }]);
        assert_eq!(
            not_perm.validate(),
            Err(CatalogError::NotAPermutation("p1".into()))
        );

        let dup_step = domain(vec![Stage {
            id: "s1".into(),
            puzzles: vec![puzzle("p1", &["a", "a"], &["a", "a"])],
        }]);
        assert!(matches!(
            dup_step.validate(),
            Err(CatalogError::DuplicateStep { .. })
        ));
    }

    #[test]
    fn test_catalog_lookup_and_names() {
        let a = domain(vec![]);
        let mut b = domain(vec![]);
        b.name = "Trading".into();
        let catalog = Catalog::new(vec![a, b]).unwrap();
        assert_eq!(catalog.domain_names(), vec!["Payments", "Trading"]);
        assert!(catalog.domain("Trading").is_some());
        assert!(catalog.domain("Lending").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_domain() {
        let err = Catalog::new(vec![domain(vec![]), domain(vec![])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateDomain("Payments".into()));
    }

    #[test]
    fn test_step_phase_parses_unknown_as_other() {
        let s: Step = serde_json::from_str(
            r#"{"id":"a","title":"A","description":"","phase":"reconciliation"}"#,
        )
        .unwrap();
        assert_eq!(s.phase, StepPhase::Other);
        let s: Step = serde_json::from_str(r#"{"id":"a","title":"A","phase":"settlement"}"#).unwrap();
        assert_eq!(s.phase, StepPhase::Settlement);
    }
}
