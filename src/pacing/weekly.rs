//! Weekly pacing with rollover
//!
//! Week numbers count whole 7-day blocks from the plan start. Allowance and
//! spending are taken over the Sunday-to-Saturday week around each block's
//! first day. Each finished week rolls `allowance - spending` into the next,
//! so a bad week is carried forward instead of forgotten.

use chrono::{Duration, NaiveDate};

use super::PacingEngine;
use crate::models::{Money, Week};

impl PacingEngine<'_> {
    /// 1-based index of the 7-day block holding `date`
    ///
    /// Dates before the plan start belong to week 1.
    pub fn week_number(&self, date: NaiveDate) -> u32 {
        let days = date.signed_duration_since(self.settings.start_date).num_days();
        if days < 0 {
            return 1;
        }
        u32::try_from(days / 7 + 1).unwrap_or(u32::MAX)
    }

    pub fn current_week_number(&self) -> u32 {
        self.week_number(self.today)
    }

    /// Meal-equivalents in the week of `date`, clipped to the plan range
    pub fn eating_days_in_week(&self, date: NaiveDate) -> f64 {
        let Some(end) = self.plan_end() else {
            return 0.0;
        };
        let week = Week::containing(date);
        let from = week.start_date().max(self.settings.start_date);
        let to = week.end_date().min(end);
        self.meal_equivalents(from, to)
    }

    /// Allowance for the week of `date` at the original daily budget
    pub fn weekly_budget(&self, date: NaiveDate) -> Money {
        self.original_daily_budget() * self.eating_days_in_week(date)
    }

    /// Rollover accumulated over every plan week before the week of `date`
    pub fn weekly_carry_in(&self, date: NaiveDate) -> Money {
        let start = self.settings.start_date;
        let weeks = self.week_number(date).saturating_sub(1);

        (0..weeks)
            .map(|w| {
                let anchor = start + Duration::days(7 * i64::from(w));
                self.weekly_budget(anchor) - self.weekly_spending_for_week(anchor)
            })
            .sum()
    }

    /// Weekly buffer for the week of `date`
    ///
    /// Week 1 compares its allowance with its spending. The current week
    /// subtracts its spending so far from the rollover; any other week reports
    /// the rollover it started with.
    pub fn weekly_ahead_by(&self, date: NaiveDate) -> Money {
        if self.total_eating_days() <= 0.0 {
            return Money::zero();
        }
        if self.week_number(date) == 1 {
            return self.weekly_budget(date) - self.weekly_spending_for_week(date);
        }

        let carry_in = self.weekly_carry_in(date);
        if Week::containing(date) == Week::containing(self.today) {
            carry_in - self.weekly_spending_for_week(date)
        } else {
            carry_in
        }
    }
}
