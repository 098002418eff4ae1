//! Day planning domain models.
//!
//! Provides the data types for describing recurring tasks, the days they
//! can be planned on, and the resulting plan.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `StudyTask` | Recurring task with a cost and a gap sequence |
//! | `GapSequence` | Day offsets of a task's occurrences |
//! | `DayCalendar` | Per-day capacities over the horizon |
//! | `DayPlan` | Tasks on each day, plus each task's first day |
//! | `PerItem` | Input given once for all items or once per item |

mod calendar;
mod gap;
mod input;
mod plan;
mod task;

pub use calendar::{DayCalendar, DEFAULT_DAY_CAPACITY, DEFAULT_HORIZON_DAYS};
pub use gap::{GapSequence, EBBINGHAUS_OFFSETS};
pub use input::PerItem;
pub use plan::{within_capacity, DayPlan, PlanViolation, PlanViolationType, LOAD_TOLERANCE};
pub use task::StudyTask;
