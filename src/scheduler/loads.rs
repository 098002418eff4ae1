//! Per-day load snapshots used during the search.
//!
//! Each search branch owns its own `DayLoads`. Placing a task never
//! mutates the snapshot it was tried on; it returns a new one, so sibling
//! branches stay independent.

use crate::models::{within_capacity, DayCalendar, StudyTask};

/// Accumulated cost on each day of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLoads {
    loads: Vec<f64>,
}

impl DayLoads {
    /// All-zero loads over `horizon` days.
    pub fn new(horizon: usize) -> Self {
        Self {
            loads: vec![0.0; horizon],
        }
    }

    /// Load on `day`, or `None` past the horizon.
    pub fn get(&self, day: usize) -> Option<f64> {
        self.loads.get(day).copied()
    }

    /// Loads for the whole horizon.
    pub fn as_slice(&self) -> &[f64] {
        &self.loads
    }

    /// Returns a copy with every occurrence of `task` added, starting on `start`.
    ///
    /// Returns `None` if any occurrence falls at or past the end of the
    /// horizon or pushes a day above its capacity.
    pub fn with_task(
        &self,
        task: &StudyTask,
        start: usize,
        calendar: &DayCalendar,
    ) -> Option<Self> {
        let mut next = self.clone();
        for day in task.gaps.days_from(start) {
            let day = day?;
            let capacity = calendar.capacity(day)?;
            let load = next.loads.get_mut(day)?;
            *load += task.cost;
            if !within_capacity(*load, capacity) {
                return None;
            }
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_task_accumulates() {
        let calendar = DayCalendar::uniform(5.0, 10);
        let task = StudyTask::new(0, 1.0).with_gaps(vec![0, 1, 3]);

        let loads = DayLoads::new(10).with_task(&task, 2, &calendar).unwrap();
        assert_eq!(loads.get(2), Some(1.0));
        assert_eq!(loads.get(3), Some(1.0));
        assert_eq!(loads.get(4), Some(0.0));
        assert_eq!(loads.get(5), Some(1.0));
        assert_eq!(loads.get(10), None);
    }

    #[test]
    fn test_with_task_leaves_original_untouched() {
        let calendar = DayCalendar::uniform(5.0, 4);
        let task = StudyTask::new(0, 2.0).with_gaps(vec![0]);

        let base = DayLoads::new(4);
        let branch_a = base.with_task(&task, 0, &calendar).unwrap();
        let branch_b = base.with_task(&task, 1, &calendar).unwrap();

        assert_eq!(base.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(branch_a.as_slice(), &[2.0, 0.0, 0.0, 0.0]);
        assert_eq!(branch_b.as_slice(), &[0.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_with_task_rejects_overflow() {
        let calendar = DayCalendar::uniform(5.0, 3);
        let task = StudyTask::new(0, 3.0).with_gaps(vec![0]);

        let once = DayLoads::new(3).with_task(&task, 0, &calendar).unwrap();
        assert!(once.with_task(&task, 0, &calendar).is_none());
        assert!(once.with_task(&task, 1, &calendar).is_some());
    }

    #[test]
    fn test_with_task_counts_repeated_offsets() {
        let calendar = DayCalendar::uniform(5.0, 3);
        let task = StudyTask::new(0, 2.0).with_gaps(vec![0, 0, 0]);
        // 3 × 2.0 = 6.0 on one day > 5.0
        assert!(DayLoads::new(3).with_task(&task, 0, &calendar).is_none());
    }

    #[test]
    fn test_with_task_rejects_beyond_horizon() {
        let calendar = DayCalendar::uniform(5.0, 3);
        let task = StudyTask::new(0, 1.0).with_gaps(vec![0, 2]);

        assert!(DayLoads::new(3).with_task(&task, 0, &calendar).is_some());
        assert!(DayLoads::new(3).with_task(&task, 1, &calendar).is_none());
    }

    #[test]
    fn test_with_task_rejects_cost_marginally_over_capacity() {
        let calendar = DayCalendar::uniform(5.0, 3);
        let task = StudyTask::new(0, 5.000_000_000_5).with_gaps(vec![0]);
        assert!(DayLoads::new(3).with_task(&task, 0, &calendar).is_none());
    }

    #[test]
    fn test_with_task_tolerates_rounding() {
        let calendar = DayCalendar::uniform(0.3, 1);
        let a = StudyTask::new(0, 0.1).with_gaps(vec![0]);
        let b = StudyTask::new(1, 0.2).with_gaps(vec![0]);

        let loads = DayLoads::new(1).with_task(&a, 0, &calendar).unwrap();
        assert!(loads.with_task(&b, 0, &calendar).is_some());
    }
}
