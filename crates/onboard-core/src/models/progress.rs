//! Completion progress over a step list.

use serde::{Deserialize, Serialize};

use super::Step;

/// Completed versus total steps on a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StepProgress {
    /// Number of steps with status `done`
    pub completed: usize,

    /// Total number of steps
    pub total: usize,
}

impl StepProgress {
    /// Counts completed steps.
    pub fn from_steps(steps: &[Step]) -> Self {
        Self {
            completed: steps.iter().filter(|s| s.status.is_done()).count(),
            total: steps.len(),
        }
    }

    /// Completion as a whole percentage, 0 for an empty list.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}
