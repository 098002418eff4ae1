//! Day-bucket scheduler for recurring tasks.
//!
//! # Algorithm
//!
//! 1. Resolve inputs: broadcast scalar costs/capacities, fill defaults.
//! 2. Split tasks, in index order, into batches of `batch_size`.
//! 3. Within a batch, depth-first: each task tries first days
//!    `prev..prev + window`, where `prev` is the previous task's first day.
//!    A candidate is expanded through the task's gap sequence and kept
//!    only if every occurrence is inside the horizon and no day goes over
//!    capacity. A dead end backtracks to the previous task of the batch.
//! 4. The first complete placement of a batch is fixed. Later batches
//!    never revisit it.
//!
//! The result is feasible but not balanced: the first valid candidate
//! wins, not the best one.
//!
//! # Complexity
//! O(n / b · w^b · g) where b=batch size, w=window, g=gap sequence length.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::DayLoads;
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{DayCalendar, DayPlan, GapSequence, PerItem, StudyTask};
use crate::validation::{check_length, validate_input};

/// Input container for planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Number of tasks.
    pub task_count: usize,
    /// Cost per task (or one cost for all).
    #[serde(default = "default_costs")]
    pub costs: PerItem<f64>,
    /// Capacity per day (or one capacity for every day of the default horizon).
    /// `None` = configured default capacity over the default horizon.
    #[serde(default)]
    pub capacities: Option<PerItem<f64>>,
    /// Gap sequence per task (or one for all). `None` = configured default.
    #[serde(default)]
    pub gaps: Option<PerItem<GapSequence>>,
}

fn default_costs() -> PerItem<f64> {
    PerItem::Uniform(1.0)
}

impl PlanRequest {
    /// Creates a request for `task_count` tasks of cost 1 with all defaults.
    pub fn new(task_count: usize) -> Self {
        Self {
            task_count,
            costs: default_costs(),
            capacities: None,
            gaps: None,
        }
    }

    /// Sets task costs.
    pub fn with_costs(mut self, costs: impl Into<PerItem<f64>>) -> Self {
        self.costs = costs.into();
        self
    }

    /// Sets day capacities.
    pub fn with_capacities(mut self, capacities: impl Into<PerItem<f64>>) -> Self {
        self.capacities = Some(capacities.into());
        self
    }

    /// Sets gap sequences.
    pub fn with_gaps(mut self, gaps: impl Into<PerItem<GapSequence>>) -> Self {
        self.gaps = Some(gaps.into());
        self
    }

    /// Broadcasts, defaults and validates the request.
    ///
    /// Returns the tasks in index order and the calendar of the horizon.
    pub fn resolve(&self, config: &PlannerConfig) -> Result<(Vec<StudyTask>, DayCalendar)> {
        let n = self.task_count;

        let length_errors: Vec<_> = [
            check_length("Costs", self.costs.explicit_len(), n),
            check_length(
                "Gap sequences",
                self.gaps.as_ref().and_then(PerItem::explicit_len),
                n,
            ),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !length_errors.is_empty() {
            return Err(PlanError::Invalid(length_errors));
        }

        let costs = self.costs.expand(n);
        let gaps = match &self.gaps {
            Some(gaps) => gaps.expand(n),
            None => vec![config.default_gaps.clone(); n],
        };

        let calendar = match &self.capacities {
            None => DayCalendar::uniform(config.default_capacity, config.default_horizon_days),
            Some(PerItem::Uniform(capacity)) => {
                DayCalendar::uniform(*capacity, config.default_horizon_days)
            }
            Some(PerItem::Each(capacities)) => DayCalendar::new(capacities.clone()),
        };

        let tasks: Vec<StudyTask> = costs
            .into_iter()
            .zip(gaps)
            .enumerate()
            .map(|(index, (cost, gaps))| StudyTask::new(index, cost).with_gaps(gaps))
            .collect();

        validate_input(&tasks, &calendar)?;
        Ok((tasks, calendar))
    }
}

/// Batched depth-first day-bucket scheduler.
///
/// # Example
///
/// ```
/// use u_spaced::scheduler::{DayBucketScheduler, PlanRequest};
///
/// let request = PlanRequest::new(2)
///     .with_costs(vec![3.0, 3.0])
///     .with_capacities(vec![5.0, 5.0, 5.0])
///     .with_gaps(vec![vec![0], vec![0]]);
///
/// let plan = DayBucketScheduler::new().schedule(&request).unwrap();
/// assert_eq!(plan.first_day(0), Some(0));
/// assert_eq!(plan.first_day(1), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DayBucketScheduler {
    config: PlannerConfig,
}

impl DayBucketScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a request.
    pub fn schedule(&self, request: &PlanRequest) -> Result<DayPlan> {
        self.config.validate()?;
        let (tasks, calendar) = request.resolve(&self.config)?;
        self.search(&tasks, &calendar)
    }

    /// Plans already-resolved tasks on a calendar.
    ///
    /// Tasks must be in index order (`tasks[i].index == i`).
    pub fn schedule_tasks(&self, tasks: &[StudyTask], calendar: &DayCalendar) -> Result<DayPlan> {
        self.config.validate()?;
        validate_input(tasks, calendar)?;
        self.search(tasks, calendar)
    }

    fn search(&self, tasks: &[StudyTask], calendar: &DayCalendar) -> Result<DayPlan> {
        let window = self.config.window();
        debug!(
            tasks = tasks.len(),
            horizon = calendar.horizon(),
            batch_size = self.config.batch_size,
            window,
            "day-bucket search started"
        );

        let mut loads = DayLoads::new(calendar.horizon());
        let mut first_days = Vec::with_capacity(tasks.len());
        let mut prev = 0;

        for batch in tasks.chunks(self.config.batch_size) {
            let mut placed = Vec::with_capacity(batch.len());
            let Some(next) = place_batch(batch, calendar, &loads, prev, window, &mut placed)
            else {
                let task = batch[0].index;
                let window_end = window_end(prev, window, calendar);
                warn!(task, window_start = prev, window_end, "no feasible placement for batch");
                return Err(PlanError::Infeasible {
                    task,
                    window_start: prev,
                    window_end,
                });
            };

            trace!(first_task = batch[0].index, ?placed, "batch placed");
            prev = placed.last().copied().unwrap_or(prev);
            first_days.extend(placed);
            loads = next;
        }

        let plan = DayPlan::from_first_days(tasks, first_days, calendar.horizon());
        debug!(
            days_used = plan.horizon_used(),
            occurrences = plan.occurrence_count(),
            "day-bucket search finished"
        );
        Ok(plan)
    }
}

/// Places `tasks` one after another, depth-first.
///
/// On success `placed` holds one first day per task and the returned
/// snapshot includes all of their occurrences. On failure `placed` is
/// left as it was on entry.
fn place_batch(
    tasks: &[StudyTask],
    calendar: &DayCalendar,
    loads: &DayLoads,
    prev: usize,
    window: usize,
    placed: &mut Vec<usize>,
) -> Option<DayLoads> {
    let Some((task, rest)) = tasks.split_first() else {
        return Some(loads.clone());
    };

    for start in prev..window_end(prev, window, calendar) {
        let Some(next) = loads.with_task(task, start, calendar) else {
            continue;
        };
        placed.push(start);
        if let Some(done) = place_batch(rest, calendar, &next, start, window, placed) {
            return Some(done);
        }
        placed.pop();
    }

    None
}

/// End (exclusive) of the candidate window starting on `start`, clipped to the horizon.
fn window_end(start: usize, window: usize, calendar: &DayCalendar) -> usize {
    start.saturating_add(window).min(calendar.horizon())
}

/// Plans `task_count` recurring tasks and returns the tasks on each day.
///
/// Scalar costs/capacities are broadcast. Missing capacities default to 5
/// per day for 365 days; missing gap sequences default to
/// `[0, 0, 0, 1, 2, 4, 7, 15]`. Trailing empty days are trimmed.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use u_spaced::scheduler::plan;
///
/// let days = plan(1, vec![1.0], Some(vec![5.0; 10].into()), Some(vec![vec![0, 1, 3]].into())).unwrap();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[0], BTreeSet::from([0]));
/// assert!(days[2].is_empty());
/// assert_eq!(days[3], BTreeSet::from([0]));
/// ```
pub fn plan(
    task_count: usize,
    cost_per_task: impl Into<PerItem<f64>>,
    day_capacity: Option<PerItem<f64>>,
    gap_sequence_per_task: Option<PerItem<GapSequence>>,
) -> Result<Vec<BTreeSet<usize>>> {
    let request = PlanRequest {
        task_count,
        costs: cost_per_task.into(),
        capacities: day_capacity,
        gaps: gap_sequence_per_task,
    };
    DayBucketScheduler::new()
        .schedule(&request)
        .map(DayPlan::into_days)
}
