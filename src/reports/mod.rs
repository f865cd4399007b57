//! Reports module for the dining budget tracker
//!
//! Each report is built from a [`crate::pacing::PacingEngine`] snapshot and
//! renders itself as terminal text.

pub mod daily;
pub mod stats;
pub mod weekly;

pub use daily::DailyReport;
pub use stats::{ItemStat, StatsReport};
pub use weekly::WeeklyReport;
