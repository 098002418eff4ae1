//! Gap sequence model.
//!
//! A gap sequence lists the day offsets, relative to a task's first
//! occurrence, on which the task recurs. Offsets may repeat: every entry
//! is one occurrence and consumes the task's cost on its day.
//!
//! # Reference
//! Ebbinghaus (1885), "Über das Gedächtnis" (forgetting curve);
//! the default cadence reviews three times on the learning day, then
//! after 1, 2, 4, 7 and 15 days.

use serde::{Deserialize, Serialize};

/// Default review cadence (day offsets from the first occurrence).
pub const EBBINGHAUS_OFFSETS: [i64; 8] = [0, 0, 0, 1, 2, 4, 7, 15];

/// Ordered day offsets on which a task recurs.
///
/// Offsets are stored signed so that malformed input survives
/// deserialization and is reported by [`crate::validation`] instead of
/// failing inside the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GapSequence {
    offsets: Vec<i64>,
}

impl GapSequence {
    /// Creates a gap sequence from raw offsets.
    pub fn new(offsets: Vec<i64>) -> Self {
        Self { offsets }
    }

    /// The forgetting-curve cadence `[0, 0, 0, 1, 2, 4, 7, 15]`.
    pub fn ebbinghaus() -> Self {
        Self::new(EBBINGHAUS_OFFSETS.to_vec())
    }

    /// Single occurrence on the first day.
    pub fn once() -> Self {
        Self::new(vec![0])
    }

    /// Raw offsets in declaration order.
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the sequence has no occurrences.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Largest offset, or `None` for an empty sequence.
    pub fn span(&self) -> Option<i64> {
        self.offsets.iter().copied().max()
    }

    /// Whether any offset is negative.
    pub fn has_negative(&self) -> bool {
        self.offsets.iter().any(|&o| o < 0)
    }

    /// Occurrence days for a first occurrence on `start`.
    ///
    /// Yields `None` for an offset that cannot be turned into a day index
    /// (negative, or overflowing `usize`).
    pub fn days_from(&self, start: usize) -> impl Iterator<Item = Option<usize>> + '_ {
        self.offsets.iter().map(move |&offset| {
            usize::try_from(offset)
                .ok()
                .and_then(|o| start.checked_add(o))
        })
    }
}

impl Default for GapSequence {
    fn default() -> Self {
        Self::ebbinghaus()
    }
}

impl From<Vec<i64>> for GapSequence {
    fn from(offsets: Vec<i64>) -> Self {
        Self::new(offsets)
    }
}

impl From<&[i64]> for GapSequence {
    fn from(offsets: &[i64]) -> Self {
        Self::new(offsets.to_vec())
    }
}
