//! Input validation for day planning problems.
//!
//! Checks the resolved tasks and calendar before any search runs.
//! Detects:
//! - Negative or non-finite costs and capacities
//! - Empty gap sequences
//! - Negative gap offsets
//! - An empty horizon when there is work to plan
//! - Tasks out of index order
//!
//! Length mismatches between per-task inputs and the task count are
//! reported by [`crate::scheduler::PlanRequest::resolve`] with the same
//! error type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DayCalendar, StudyTask};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A task cost is negative, NaN or infinite.
    InvalidCost,
    /// A day capacity is negative, NaN or infinite.
    InvalidCapacity,
    /// A task has no occurrences.
    EmptyGapSequence,
    /// A gap offset is negative.
    NegativeOffset,
    /// A per-task list does not have one entry per task.
    LengthMismatch,
    /// Tasks were given but the horizon has no days.
    EmptyCalendar,
    /// A task's index differs from its position in the task list.
    IndexMismatch,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates resolved tasks against a calendar.
///
/// Checks:
/// 1. Every cost is finite and non-negative
/// 2. Every capacity is finite and non-negative
/// 3. Every gap sequence has at least one offset
/// 4. No gap offset is negative
/// 5. The horizon is non-empty if there are tasks
/// 6. `tasks[i].index == i`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[StudyTask], calendar: &DayCalendar) -> ValidationResult {
    let mut errors = Vec::new();

    for (position, task) in tasks.iter().enumerate() {
        if task.index != position {
            errors.push(ValidationError::new(
                ValidationErrorKind::IndexMismatch,
                format!("Task at position {position} has index {}", task.index),
            ));
        }

        if !is_non_negative(task.cost) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCost,
                format!("Task {} has invalid cost {}", task.index, task.cost),
            ));
        }

        if task.gaps.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGapSequence,
                format!("Task {} has an empty gap sequence", task.index),
            ));
        }

        if let Some(&offset) = task.gaps.offsets().iter().find(|&&o| o < 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeOffset,
                format!("Task {} has negative gap offset {offset}", task.index),
            ));
        }
    }

    for (day, &capacity) in calendar.capacities.iter().enumerate() {
        if !is_non_negative(capacity) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Day {day} has invalid capacity {capacity}"),
            ));
        }
    }

    if calendar.is_empty() && !tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCalendar,
            format!("{} tasks given but the horizon has no days", tasks.len()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a per-task list has exactly `task_count` entries.
pub(crate) fn check_length(
    what: &str,
    actual: Option<usize>,
    task_count: usize,
) -> Option<ValidationError> {
    match actual {
        Some(len) if len != task_count => Some(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("{what} has {len} entries but there are {task_count} tasks"),
        )),
        _ => None,
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
