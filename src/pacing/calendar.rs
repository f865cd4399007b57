//! Eating-day arithmetic
//!
//! All day and week counts route through [`count_eating_days`].

use chrono::NaiveDate;

use super::PacingEngine;
use crate::models::Break;

/// Count the days in `[start, end]` not covered by any break
///
/// Both ends are inclusive. Overlapping breaks are fine: a day is excluded if
/// it falls in at least one of them. Returns 0 when `start > end`.
pub fn count_eating_days(start: NaiveDate, end: NaiveDate, breaks: &[Break]) -> u32 {
    if start > end {
        return 0;
    }

    let days = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !breaks.iter().any(|b| b.contains(*day)))
        .count();

    u32::try_from(days).unwrap_or(u32::MAX)
}

impl PacingEngine<'_> {
    /// Meal-equivalents in `[start, end]`: eating days scaled by meals per week / 7
    pub fn meal_equivalents(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let days = count_eating_days(start, end, &self.settings.breaks);
        f64::from(days) * f64::from(self.settings.meals_per_week.get()) / 7.0
    }

    /// Plan end date, only when the plan is well-formed
    pub(crate) fn plan_end(&self) -> Option<NaiveDate> {
        self.settings
            .end_date
            .filter(|end| self.settings.start_date <= *end)
    }
}
