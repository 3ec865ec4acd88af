//! Arrangement buffers, the logical outcome of drag-and-drop.
//!
//! Two ordered areas together always hold exactly the current puzzle's
//! steps. A move transfers one step by id and appends it to the destination;
//! the order of the arranged area is the player's answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Step;

/// Which side of the board a step sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Unarranged,
    Arranged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    unarranged: Vec<Step>,
    arranged: Vec<Step>,
}

impl Arrangement {
    /// Fresh board: every step unarranged, in presentation order.
    pub fn new(shuffled: &[Step]) -> Self {
        Self {
            unarranged: shuffled.to_vec(),
            arranged: Vec::new(),
        }
    }

    pub fn unarranged(&self) -> &[Step] {
        &self.unarranged
    }

    pub fn arranged(&self) -> &[Step] {
        &self.arranged
    }

    /// Total steps across both areas.
    pub fn len(&self) -> usize {
        self.unarranged.len() + self.arranged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every step has been placed and the answer has `expected` entries.
    pub fn is_complete(&self, expected: usize) -> bool {
        self.unarranged.is_empty() && self.arranged.len() == expected
    }

    /// Move `step_id` from `from` to the end of `to`. On error nothing changes.
    pub fn move_step(&mut self, step_id: &str, from: Area, to: Area) -> Result<(), MoveError> {
        if from == to {
            return Err(MoveError::SameArea(from));
        }
        let source = match from {
            Area::Unarranged => &mut self.unarranged,
            Area::Arranged => &mut self.arranged,
        };
        let index = source
            .iter()
            .position(|s| s.id == step_id)
            .ok_or_else(|| MoveError::StepNotFound {
                step_id: step_id.to_string(),
                area: from,
            })?;
        let step = source.remove(index);
        match to {
            Area::Unarranged => self.unarranged.push(step),
            Area::Arranged => self.arranged.push(step),
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.unarranged.clear();
        self.arranged.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("step {step_id} is not in the {area:?} area")]
    StepNotFound { step_id: String, area: Area },

    #[error("source and destination are both {0:?}")]
    SameArea(Area),
}
