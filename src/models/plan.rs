//! Day plan (solution) model.
//!
//! A plan records, for every day, which tasks have an occurrence on it.
//! It is built once from the chosen first days and returned by value.
//!
//! # Load accounting
//! A day's load counts every occurrence: a task whose gap sequence repeats
//! an offset contributes its cost once per repetition, even though the
//! day's task set lists it only once.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DayCalendar, StudyTask};

/// Relative slack allowed when comparing a summed load against a capacity.
///
/// Covers rounding in sums of a few dozen terms and nothing more, so a
/// cost that really exceeds the capacity is never accepted.
pub const LOAD_TOLERANCE: f64 = 64.0 * f64::EPSILON;

/// Whether `load` fits in `capacity`, up to rounding error.
#[inline]
pub fn within_capacity(load: f64, capacity: f64) -> bool {
    load <= capacity + capacity.abs() * LOAD_TOLERANCE
}

/// A complete plan: tasks per day plus each task's first day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Tasks with an occurrence on each day. Trailing empty days are trimmed.
    days: Vec<BTreeSet<usize>>,
    /// Load of each day (same length as `days`).
    loads: Vec<f64>,
    /// First-occurrence day of each task, indexed by task.
    first_days: Vec<usize>,
}

/// A problem detected when checking a plan against its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanViolation {
    /// Type of violation.
    pub violation_type: PlanViolationType,
    /// Day index for capacity problems, task index otherwise.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanViolationType {
    /// A day's load is above its capacity.
    CapacityExceeded,
    /// A task's days differ from its first day shifted by its gap sequence.
    OccurrenceMismatch,
    /// A task has an occurrence at or past the end of the horizon.
    BeyondHorizon,
}

impl PlanViolation {
    fn new(violation_type: PlanViolationType, index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            index,
            message: message.into(),
        }
    }
}

impl DayPlan {
    /// Builds a plan by expanding every task from its first day.
    ///
    /// Occurrences at or past `horizon` are dropped; use
    /// [`DayPlan::verify`] to detect them.
    pub fn from_first_days(tasks: &[StudyTask], first_days: Vec<usize>, horizon: usize) -> Self {
        let mut days: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); horizon];
        let mut loads = vec![0.0; horizon];

        for (task, &start) in tasks.iter().zip(&first_days) {
            for day in task.gaps.days_from(start).flatten() {
                if day < horizon {
                    days[day].insert(task.index);
                    loads[day] += task.cost;
                }
            }
        }

        let used = days
            .iter()
            .rposition(|tasks| !tasks.is_empty())
            .map_or(0, |last| last + 1);
        days.truncate(used);
        loads.truncate(used);

        Self {
            days,
            loads,
            first_days,
        }
    }

    /// Tasks per day.
    pub fn days(&self) -> &[BTreeSet<usize>] {
        &self.days
    }

    /// Consumes the plan, returning the tasks per day.
    pub fn into_days(self) -> Vec<BTreeSet<usize>> {
        self.days
    }

    /// Load per day.
    pub fn loads(&self) -> &[f64] {
        &self.loads
    }

    /// First day per task.
    pub fn first_days(&self) -> &[usize] {
        &self.first_days
    }

    /// Tasks on `day` (empty past the last used day).
    pub fn tasks_on(&self, day: usize) -> Option<&BTreeSet<usize>> {
        self.days.get(day)
    }

    /// Load on `day` (0 past the last used day).
    pub fn load_on(&self, day: usize) -> f64 {
        self.loads.get(day).copied().unwrap_or(0.0)
    }

    /// First-occurrence day of `task`.
    pub fn first_day(&self, task: usize) -> Option<usize> {
        self.first_days.get(task).copied()
    }

    /// Days on which `task` has an occurrence, ascending.
    pub fn days_for_task(&self, task: usize) -> BTreeSet<usize> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, tasks)| tasks.contains(&task))
            .map(|(day, _)| day)
            .collect()
    }

    /// Number of days up to and including the last non-empty one.
    pub fn horizon_used(&self) -> usize {
        self.days.len()
    }

    /// Number of planned tasks.
    pub fn task_count(&self) -> usize {
        self.first_days.len()
    }

    /// Number of (task, day) pairs in the plan.
    pub fn occurrence_count(&self) -> usize {
        self.days.iter().map(BTreeSet::len).sum()
    }

    /// Whether no task is planned.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Checks the plan against the tasks and calendar it was built for.
    ///
    /// Recomputes every task's occurrences from its first day and every
    /// day's load from scratch, independently of the stored loads.
    /// Returns an empty list for a consistent plan.
    pub fn verify(&self, tasks: &[StudyTask], calendar: &DayCalendar) -> Vec<PlanViolation> {
        let mut violations = Vec::new();
        let horizon = calendar.horizon();

        if self.first_days.len() != tasks.len() {
            violations.push(PlanViolation::new(
                PlanViolationType::OccurrenceMismatch,
                self.first_days.len().min(tasks.len()),
                format!(
                    "Plan places {} tasks but {} were given",
                    self.first_days.len(),
                    tasks.len()
                ),
            ));
        }

        let mut loads = vec![0.0; horizon];
        for (task, &start) in tasks.iter().zip(&self.first_days) {
            let mut expected = BTreeSet::new();
            for day in task.gaps.days_from(start) {
                match day {
                    Some(day) if day < horizon => {
                        expected.insert(day);
                        loads[day] += task.cost;
                    }
                    _ => violations.push(PlanViolation::new(
                        PlanViolationType::BeyondHorizon,
                        task.index,
                        format!(
                            "Task {} starting on day {start} recurs past the {horizon}-day horizon",
                            task.index
                        ),
                    )),
                }
            }

            if self.days_for_task(task.index) != expected {
                violations.push(PlanViolation::new(
                    PlanViolationType::OccurrenceMismatch,
                    task.index,
                    format!(
                        "Task {} days do not match its gap sequence from day {start}",
                        task.index
                    ),
                ));
            }
        }

        for (day, (&load, &capacity)) in loads.iter().zip(&calendar.capacities).enumerate() {
            if !within_capacity(load, capacity) {
                violations.push(PlanViolation::new(
                    PlanViolationType::CapacityExceeded,
                    day,
                    format!("Day {day} load {load} exceeds capacity {capacity}"),
                ));
            }
        }

        violations
    }

    /// Whether [`DayPlan::verify`] finds nothing.
    pub fn is_valid_for(&self, tasks: &[StudyTask], calendar: &DayCalendar) -> bool {
        self.verify(tasks, calendar).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<StudyTask> {
        vec![
            StudyTask::new(0, 1.0).with_gaps(vec![0, 1, 3]),
            StudyTask::new(1, 2.0).with_gaps(vec![0, 0]),
        ]
    }

    #[test]
    fn test_from_first_days() {
        let plan = DayPlan::from_first_days(&sample_tasks(), vec![0, 1], 10);

        assert_eq!(plan.horizon_used(), 4);
        assert_eq!(plan.tasks_on(0), Some(&BTreeSet::from([0])));
        assert_eq!(plan.tasks_on(1), Some(&BTreeSet::from([0, 1])));
        assert!(plan.tasks_on(2).unwrap().is_empty());
        assert_eq!(plan.tasks_on(3), Some(&BTreeSet::from([0])));
        assert_eq!(plan.tasks_on(4), None);
    }

    #[test]
    fn test_repeated_offsets_count_load_twice() {
        let plan = DayPlan::from_first_days(&sample_tasks(), vec![0, 1], 10);
        // Day 1: task 0 (1.0) + task 1 twice (2.0 + 2.0)
        assert!((plan.load_on(1) - 5.0).abs() < 1e-10);
        assert!((plan.load_on(0) - 1.0).abs() < 1e-10);
        assert!((plan.load_on(9) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_days_for_task() {
        let plan = DayPlan::from_first_days(&sample_tasks(), vec![2, 0], 10);
        assert_eq!(plan.days_for_task(0), BTreeSet::from([2, 3, 5]));
        assert_eq!(plan.days_for_task(1), BTreeSet::from([0]));
        assert_eq!(plan.first_day(0), Some(2));
        assert_eq!(plan.first_day(7), None);
        assert_eq!(plan.occurrence_count(), 4);
        assert_eq!(plan.task_count(), 2);
    }

    #[test]
    fn test_empty_plan() {
        let plan = DayPlan::from_first_days(&[], vec![], 365);
        assert!(plan.is_empty());
        assert_eq!(plan.horizon_used(), 0);
        assert!(plan.into_days().is_empty());
    }

    #[test]
    fn test_verify_consistent() {
        let tasks = sample_tasks();
        let calendar = DayCalendar::uniform(5.0, 10);
        let plan = DayPlan::from_first_days(&tasks, vec![0, 1], 10);
        assert!(plan.is_valid_for(&tasks, &calendar));
    }

    #[test]
    fn test_verify_capacity_exceeded() {
        let tasks = sample_tasks();
        let calendar = DayCalendar::uniform(4.0, 10);
        let plan = DayPlan::from_first_days(&tasks, vec![0, 1], 10);

        let violations = plan.verify(&tasks, &calendar);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, PlanViolationType::CapacityExceeded);
        assert_eq!(violations[0].index, 1);
    }

    #[test]
    fn test_verify_beyond_horizon() {
        let tasks = sample_tasks();
        let calendar = DayCalendar::uniform(5.0, 3);
        let plan = DayPlan::from_first_days(&tasks, vec![0, 1], 3);

        let violations = plan.verify(&tasks, &calendar);
        assert!(violations
            .iter()
            .any(|v| v.violation_type == PlanViolationType::BeyondHorizon && v.index == 0));
    }

    #[test]
    fn test_verify_task_count_mismatch() {
        let tasks = sample_tasks();
        let calendar = DayCalendar::uniform(5.0, 10);
        let plan = DayPlan::from_first_days(&tasks[..1], vec![0], 10);

        let violations = plan.verify(&tasks, &calendar);
        assert!(violations
            .iter()
            .any(|v| v.violation_type == PlanViolationType::OccurrenceMismatch));
    }

    #[test]
    fn test_within_capacity() {
        assert!(within_capacity(5.0, 5.0));
        assert!(within_capacity(0.1 + 0.2, 0.3));
        assert!(within_capacity(0.0, 0.0));
        assert!(!within_capacity(5.000_000_000_5, 5.0));
        assert!(!within_capacity(1e-12, 0.0));
        assert!(!within_capacity(1e12 + 1.0, 1e12));
    }

    #[test]
    fn test_plan_json_roundtrip() {
        let plan = DayPlan::from_first_days(&sample_tasks(), vec![0, 1], 10);
        let json = serde_json::to_string(&plan).unwrap();
        let back: DayPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
