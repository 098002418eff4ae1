//! Day calendar model.
//!
//! The planning horizon is a run of consecutive days `0..D`, each with a
//! capacity: the maximum total task cost it can absorb. Days beyond the
//! horizon do not exist; the scheduler never extends it.

use serde::{Deserialize, Serialize};

/// Default capacity per day when none is given.
pub const DEFAULT_DAY_CAPACITY: f64 = 5.0;

/// Default horizon length (days) when no per-day capacities are given.
pub const DEFAULT_HORIZON_DAYS: usize = 365;

/// Per-day capacities over the planning horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCalendar {
    /// Capacity of each day, indexed by day.
    pub capacities: Vec<f64>,
}

impl DayCalendar {
    /// Creates a calendar from explicit per-day capacities.
    pub fn new(capacities: Vec<f64>) -> Self {
        Self { capacities }
    }

    /// Creates a calendar with the same capacity on every day.
    pub fn uniform(capacity: f64, days: usize) -> Self {
        Self::new(vec![capacity; days])
    }

    /// Number of days in the horizon.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.capacities.len()
    }

    /// Whether the horizon has no days.
    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty()
    }

    /// Capacity of `day`, or `None` if the day lies beyond the horizon.
    #[inline]
    pub fn capacity(&self, day: usize) -> Option<f64> {
        self.capacities.get(day).copied()
    }

    /// Sum of all day capacities.
    pub fn total_capacity(&self) -> f64 {
        self.capacities.iter().sum()
    }
}

impl Default for DayCalendar {
    /// 365 days of capacity 5.
    fn default() -> Self {
        Self::uniform(DEFAULT_DAY_CAPACITY, DEFAULT_HORIZON_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calendar() {
        let cal = DayCalendar::default();
        assert_eq!(cal.horizon(), 365);
        assert_eq!(cal.capacity(0), Some(5.0));
        assert_eq!(cal.capacity(364), Some(5.0));
        assert_eq!(cal.capacity(365), None);
    }

    #[test]
    fn test_explicit_capacities() {
        let cal = DayCalendar::new(vec![1.0, 2.0, 3.5]);
        assert_eq!(cal.horizon(), 3);
        assert_eq!(cal.capacity(1), Some(2.0));
        assert!((cal.total_capacity() - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_calendar() {
        let cal = DayCalendar::new(vec![]);
        assert!(cal.is_empty());
        assert_eq!(cal.capacity(0), None);
    }
}
