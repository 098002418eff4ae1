//! Error types for day planning.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors returned by the planner.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The input failed validation. Carries every problem found.
    #[error("Invalid input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    /// The bounded search found no placement for a batch.
    #[error(
        "No feasible schedule found: no placement for the batch starting at task {task} (first days {window_start}..{window_end})"
    )]
    Infeasible {
        /// First task of the batch that could not be placed.
        task: usize,
        /// First candidate day of the batch's first task (inclusive).
        window_start: usize,
        /// End of that task's candidate window (exclusive, clipped to the horizon).
        window_end: usize,
    },

    /// Planner configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Planner configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PlanError {
    /// Whether this error reports an infeasible instance rather than bad input.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. })
    }

    /// Validation problems, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for PlanError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
