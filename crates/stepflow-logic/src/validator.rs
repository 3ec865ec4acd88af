//! Order validation. All-or-nothing: no partial credit.

use crate::catalog::Step;

/// True when `arranged` matches `correct` position by position (by step id).
/// Any length mismatch is false.
pub fn validate_order(arranged: &[Step], correct: &[Step]) -> bool {
    arranged.len() == correct.len()
        && arranged
            .iter()
            .zip(correct)
            .all(|(placed, expected)| placed.id == expected.id)
}

/// Index of the first misplaced step, or `None` if the order is correct.
/// A missing or extra trailing step counts as a mismatch at that index.
pub fn first_mismatch(arranged: &[Step], correct: &[Step]) -> Option<usize> {
    let shared = arranged.len().min(correct.len());
    (0..shared)
        .find(|&i| arranged[i].id != correct[i].id)
        .or((arranged.len() != correct.len()).then_some(shared))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StepPhase;

    fn steps(ids: &[&str]) -> Vec<Step> {
        ids.iter()
            .map(|id| Step::new(*id, *id, StepPhase::Other))
            .collect()
    }

    #[test]
    fn test_canonical_order_is_valid() {
        let correct = steps(&["a", "b", "c", "d"]);
        assert!(validate_order(&correct, &correct));
        assert_eq!(first_mismatch(&correct, &correct), None);
    }

    #[test]
    fn test_every_other_permutation_is_invalid() {
        let correct = steps(&["a", "b", "c"]);
        let perms = [
            ["a", "c", "b"],
            ["b", "a", "c"],
            ["b", "c", "a"],
            ["c", "a", "b"],
            ["c", "b", "a"],
        ];
        for perm in perms {
            assert!(!validate_order(&steps(&perm), &correct), "{:?}", perm);
        }
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        let correct = steps(&["a", "b", "c"]);
        assert!(!validate_order(&steps(&["a", "b"]), &correct));
        assert!(!validate_order(&steps(&["a", "b", "c", "d"]), &correct));
        assert!(!validate_order(&[], &correct));
        assert_eq!(first_mismatch(&steps(&["a", "b"]), &correct), Some(2));
    }

    #[test]
    fn test_first_mismatch_position() {
        let correct = steps(&["a", "b", "c", "d"]);
        assert_eq!(
            first_mismatch(&steps(&["a", "b", "d", "c"]), &correct),
            Some(2)
        );
        assert_eq!(
            first_mismatch(&steps(&["d", "b", "c", "a"]), &correct),
            Some(0)
        );
    }
}
