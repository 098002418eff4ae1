//! Plan quality metrics (KPIs).
//!
//! Computes load indicators over the used part of a plan's horizon
//! (day 0 through the last day with an occurrence).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days Used | Index of the last non-empty day + 1 |
//! | Peak Load | Largest single-day load |
//! | Total Load | Sum of all occurrence costs |
//! | Avg Utilization | Mean of load / capacity over used days with capacity |
//! | Max Utilization | Largest load / capacity |
//! | Load Std Dev | Population standard deviation of daily load over used days |
//! | Last First Day | Latest first-occurrence day of any task |

use crate::models::{DayCalendar, DayPlan};

/// Plan load indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Days up to and including the last non-empty one.
    pub horizon_used_days: usize,
    /// Largest single-day load.
    pub peak_load: f64,
    /// Sum of loads over all days.
    pub total_load: f64,
    /// Mean utilization over used days with non-zero capacity (0.0..1.0).
    pub avg_utilization: f64,
    /// Largest utilization of any day with non-zero capacity.
    pub max_utilization: f64,
    /// Population standard deviation of daily load over used days.
    pub load_std_dev: f64,
    /// Latest first-occurrence day. `None` for an empty plan.
    pub last_first_day: Option<usize>,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the calendar it was built on.
    pub fn calculate(plan: &DayPlan, calendar: &DayCalendar) -> Self {
        let loads = plan.loads();
        let used = loads.len();

        let peak_load = loads.iter().copied().fold(0.0, f64::max);
        let total_load: f64 = loads.iter().sum();

        let utilizations: Vec<f64> = loads
            .iter()
            .enumerate()
            .filter_map(|(day, &load)| {
                calendar
                    .capacity(day)
                    .filter(|&capacity| capacity > 0.0)
                    .map(|capacity| load / capacity)
            })
            .collect();
        let avg_utilization = if utilizations.is_empty() {
            0.0
        } else {
            utilizations.iter().sum::<f64>() / utilizations.len() as f64
        };
        let max_utilization = utilizations.iter().copied().fold(0.0, f64::max);

        let load_std_dev = if used == 0 {
            0.0
        } else {
            let mean = total_load / used as f64;
            let variance = loads.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / used as f64;
            variance.sqrt()
        };

        Self {
            horizon_used_days: used,
            peak_load,
            total_load,
            avg_utilization,
            max_utilization,
            load_std_dev,
            last_first_day: plan.first_days().iter().copied().max(),
        }
    }

    /// Whether the plan stays under `max_peak_load` and reaches `min_utilization`.
    pub fn meets_thresholds(&self, max_peak_load: f64, min_utilization: f64) -> bool {
        self.peak_load <= max_peak_load && self.avg_utilization >= min_utilization
    }
}
