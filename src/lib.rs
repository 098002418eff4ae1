//! Spaced-repetition day planning for the U-Engine ecosystem.
//!
//! Assigns recurring tasks to days so that no day's total cost exceeds
//! its capacity. Each task recurs on the days given by its gap sequence,
//! counted from the day of its first occurrence.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `StudyTask`, `GapSequence`, `DayCalendar`,
//!   `DayPlan`, `PerItem`
//! - **`scheduler`**: `DayBucketScheduler`, the `plan` entry point and `PlanKpi`
//! - **`validation`**: Input integrity checks (costs, capacities, gap offsets)
//! - **`config`**: `PlannerConfig` (batch size, defaults), loadable from TOML
//! - **`error`**: `PlanError`
//!
//! # Example
//!
//! ```
//! use u_spaced::scheduler::plan;
//!
//! // Two tasks of cost 3 cannot share a day of capacity 5.
//! let days = plan(
//!     2,
//!     vec![3.0, 3.0],
//!     Some(vec![5.0, 5.0, 5.0].into()),
//!     Some(vec![vec![0], vec![0]].into()),
//! )
//! .unwrap();
//! assert_eq!(days.len(), 2);
//! assert!(days[1].contains(&1));
//! ```
//!
//! # References
//!
//! - Ebbinghaus (1885), "Über das Gedächtnis"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, Result};
