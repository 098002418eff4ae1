//! Day-bucket scheduler and plan KPI evaluation.
//!
//! # Algorithm
//!
//! `DayBucketScheduler` places tasks in index order, a batch at a time,
//! trying a bounded window of first days per task and expanding each
//! candidate through the task's gap sequence. It is greedy: the first
//! feasible placement of a batch is kept and never revisited.
//!
//! # KPI
//!
//! `PlanKpi` computes load metrics: peak load, utilization and the spread
//! of daily load.

mod bucket;
mod kpi;
mod loads;

pub use bucket::{plan, DayBucketScheduler, PlanRequest};
pub use kpi::PlanKpi;
pub use loads::DayLoads;
