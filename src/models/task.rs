//! Study task model.
//!
//! A task is a unit of work that recurs over several days. Each time an
//! occurrence lands on a day it consumes `cost` units of that day's
//! capacity.

use serde::{Deserialize, Serialize};

use super::GapSequence;

/// A recurring task to be planned onto days.
///
/// Tasks are identified by their position in the input (`0..n`), which is
/// also the order in which the scheduler places them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTask {
    /// Task index.
    pub index: usize,
    /// Capacity consumed per occurrence.
    pub cost: f64,
    /// Day offsets of the occurrences, relative to the first one.
    pub gaps: GapSequence,
}

impl StudyTask {
    /// Creates a task with the default (forgetting-curve) gap sequence.
    pub fn new(index: usize, cost: f64) -> Self {
        Self {
            index,
            cost,
            gaps: GapSequence::default(),
        }
    }

    /// Sets the gap sequence.
    pub fn with_gaps(mut self, gaps: impl Into<GapSequence>) -> Self {
        self.gaps = gaps.into();
        self
    }

    /// Total capacity consumed across all occurrences.
    pub fn total_cost(&self) -> f64 {
        self.cost * self.gaps.len() as f64
    }

    /// Number of occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.gaps.len()
    }
}
