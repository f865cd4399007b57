//! Budget pacing engine
//!
//! Turns a plan, the transaction log and a reference "today" into the figures
//! the tracker reports: balances, eating days, the fixed original daily
//! budget, the live forecast, and the ahead/behind buffer at daily and weekly
//! granularity.
//!
//! The engine borrows an immutable snapshot and holds no state of its own.
//! Every query is recomputed from scratch, and "today" is passed in instead of
//! being read from the clock, so results are reproducible.
//!
//! # Pacing model
//!
//! Ahead-by compares the *balance* actually held against the balance the plan
//! expected, using the original daily budget (`total / total eating days`),
//! which never changes with spending. Weekly rollover accumulates the same
//! quantity week by week, so the daily and weekly figures telescope onto each
//! other.
//!
//! ```
//! use chrono::NaiveDate;
//! use dining_budget::models::{BudgetSettings, Money};
//! use dining_budget::pacing::PacingEngine;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let mut plan = BudgetSettings::starting(start);
//! plan.total = Money::from_dollars(700.0);
//! plan.end_date = NaiveDate::from_ymd_opt(2025, 5, 7);
//!
//! let engine = PacingEngine::new(&plan, &[], start);
//! assert_eq!(engine.total_eating_days(), 122.0);
//! assert_eq!(engine.ahead_by().dollars(), 0.0);
//! ```

mod balance;
mod calendar;
mod daily;
mod status;
mod weekly;

pub use calendar::count_eating_days;
pub use status::{PaceStatus, ON_TRACK_THRESHOLD};

use chrono::NaiveDate;

use crate::models::{BudgetSettings, Transaction};

/// Read-only pacing queries over one settings/transactions snapshot
#[derive(Debug, Clone, Copy)]
pub struct PacingEngine<'a> {
    settings: &'a BudgetSettings,
    transactions: &'a [Transaction],
    today: NaiveDate,
}

impl<'a> PacingEngine<'a> {
    pub fn new(
        settings: &'a BudgetSettings,
        transactions: &'a [Transaction],
        today: NaiveDate,
    ) -> Self {
        Self {
            settings,
            transactions,
            today,
        }
    }

    pub fn settings(&self) -> &'a BudgetSettings {
        self.settings
    }

    pub fn transactions(&self) -> &'a [Transaction] {
        self.transactions
    }

    /// The calendar day treated as "today" by every query
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
