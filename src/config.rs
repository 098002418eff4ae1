//! Planner configuration.
//!
//! Every field has a default, so an empty TOML document yields the
//! standard planner: batches of 4 tasks, a 3-day candidate window,
//! capacity 5 over 365 days and the forgetting-curve gap sequence.
//!
//! ```toml
//! batch_size = 6
//! default_capacity = 8.0
//! default_horizon_days = 90
//! default_gaps = [0, 1, 3, 7]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{GapSequence, DEFAULT_DAY_CAPACITY, DEFAULT_HORIZON_DAYS};

/// Default number of tasks placed per search batch.
pub const DEFAULT_BATCH_SIZE: usize = 4;

/// Lower bound on the number of candidate first days per task.
pub const DEFAULT_MIN_WINDOW: usize = 3;

/// Tunables and defaults for the day-bucket scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Tasks placed together before the partial plan is fixed.
    pub batch_size: usize,
    /// Minimum candidate window; the window is `max(batch_size / 2, min_window)`.
    pub min_window: usize,
    /// Capacity used when no capacities are given.
    pub default_capacity: f64,
    /// Horizon used when capacities are missing or given as one value.
    pub default_horizon_days: usize,
    /// Gap sequence used when no gap sequences are given.
    pub default_gaps: GapSequence,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            min_window: DEFAULT_MIN_WINDOW,
            default_capacity: DEFAULT_DAY_CAPACITY,
            default_horizon_days: DEFAULT_HORIZON_DAYS,
            default_gaps: GapSequence::ebbinghaus(),
        }
    }
}

impl PlannerConfig {
    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the minimum candidate window.
    pub fn with_min_window(mut self, min_window: usize) -> Self {
        self.min_window = min_window;
        self
    }

    /// Sets the default capacity and horizon.
    pub fn with_default_calendar(mut self, capacity: f64, horizon_days: usize) -> Self {
        self.default_capacity = capacity;
        self.default_horizon_days = horizon_days;
        self
    }

    /// Sets the default gap sequence.
    pub fn with_default_gaps(mut self, gaps: impl Into<GapSequence>) -> Self {
        self.default_gaps = gaps.into();
        self
    }

    /// Number of consecutive candidate first days tried per task.
    pub fn window(&self) -> usize {
        (self.batch_size / 2).max(self.min_window)
    }

    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(PlanError::Config("batch_size must be at least 1".into()));
        }
        if self.min_window == 0 {
            return Err(PlanError::Config("min_window must be at least 1".into()));
        }
        if !self.default_capacity.is_finite() || self.default_capacity < 0.0 {
            return Err(PlanError::Config(format!(
                "default_capacity must be finite and non-negative, got {}",
                self.default_capacity
            )));
        }
        if self.default_horizon_days == 0 {
            return Err(PlanError::Config(
                "default_horizon_days must be at least 1".into(),
            ));
        }
        if self.default_gaps.is_empty() || self.default_gaps.has_negative() {
            return Err(PlanError::Config(
                "default_gaps must be non-empty with non-negative offsets".into(),
            ));
        }
        Ok(())
    }
}
