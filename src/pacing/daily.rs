//! Daily pacing: eating days, the original daily budget and ahead-by

use chrono::NaiveDate;

use super::PacingEngine;
use crate::models::Money;

impl PacingEngine<'_> {
    /// Meal-equivalents over the whole plan; zero without a valid end date
    pub fn total_eating_days(&self) -> f64 {
        match self.plan_end() {
            Some(end) => self.meal_equivalents(self.settings.start_date, end),
            None => 0.0,
        }
    }

    /// Fixed per-meal-equivalent allowance, independent of spending
    pub fn original_daily_budget(&self) -> Money {
        self.settings.total.per(self.total_eating_days())
    }

    /// Meal-equivalents over `[start, date - 1]`; zero without a valid end date
    pub fn eating_days_elapsed_as_of(&self, date: NaiveDate) -> f64 {
        if self.plan_end().is_none() {
            return 0.0;
        }
        match date.pred_opt() {
            Some(last) if last >= self.settings.start_date => {
                self.meal_equivalents(self.settings.start_date, last)
            }
            _ => 0.0,
        }
    }

    pub fn eating_days_elapsed(&self) -> f64 {
        self.eating_days_elapsed_as_of(self.today)
    }

    /// Meal-equivalents from today through the plan end
    ///
    /// When today lies outside the plan (an upcoming or past semester) this is
    /// the whole plan.
    pub fn eating_days_remaining(&self) -> f64 {
        let Some(end) = self.plan_end() else {
            return 0.0;
        };
        let start = self.settings.start_date;
        if self.today < start || self.today > end {
            return self.meal_equivalents(start, end);
        }
        self.meal_equivalents(self.today, end)
    }

    /// Live forecast: remaining balance spread over remaining eating days
    pub fn budget_per_meal(&self) -> Money {
        self.remaining_balance().per(self.eating_days_remaining())
    }

    /// Balance the plan expects at the start of `date`
    pub fn expected_remaining_as_of(&self, date: NaiveDate) -> Money {
        self.settings.total - self.original_daily_budget() * self.eating_days_elapsed_as_of(date)
    }

    /// Buffer held at the start of today versus the plan
    ///
    /// Today's own transactions are excluded so the figure stays stable during
    /// the day.
    pub fn ahead_by(&self) -> Money {
        if self.total_eating_days() <= 0.0 {
            return Money::zero();
        }
        self.running_balance_before(self.today) - self.expected_remaining_as_of(self.today)
    }

    /// Buffer versus the plan when viewing `date`
    ///
    /// Past dates use the balance at the start of that date. Future dates use
    /// the current balance, since nothing has been spent there yet.
    pub fn ahead_by_as_of(&self, date: NaiveDate) -> Money {
        if date == self.today {
            return self.ahead_by();
        }
        if self.total_eating_days() <= 0.0 {
            return Money::zero();
        }
        let actual = if date > self.today {
            self.running_balance()
        } else {
            self.running_balance_before(date)
        };
        actual - self.expected_remaining_as_of(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Break, BudgetSettings, MealsPerWeek, Transaction};

    const EPS: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn spend(amount: f64, day: NaiveDate) -> Transaction {
        Transaction::spend(
            Money::from_dollars(amount),
            "Meal",
            day.and_hms_opt(12, 0, 0).unwrap(),
        )
    }

    fn spring_plan() -> BudgetSettings {
        let mut settings = BudgetSettings::starting(date(2025, 1, 6));
        settings.total = Money::from_dollars(700.0);
        settings.end_date = Some(date(2025, 5, 7));
        settings
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_original_daily_budget_for_full_semester() {
        let settings = spring_plan();
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 6));
        assert_eq!(engine.total_eating_days(), 122.0);
        assert!(close(engine.original_daily_budget().dollars(), 700.0 / 122.0));
        assert!(close(engine.budget_per_meal().dollars(), 700.0 / 122.0));
        assert!(close(engine.ahead_by().dollars(), 0.0));
    }

    #[test]
    fn test_original_daily_budget_ignores_spending() {
        let settings = spring_plan();
        let txns = vec![spend(200.0, date(2025, 1, 6))];
        let engine = PacingEngine::new(&settings, &txns, date(2025, 1, 10));
        assert!(close(engine.original_daily_budget().dollars(), 700.0 / 122.0));
    }

    #[test]
    fn test_break_reduces_eating_days() {
        let mut settings = spring_plan();
        settings.breaks = vec![Break::new(date(2025, 3, 17), date(2025, 3, 21))];
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 6));
        assert_eq!(engine.total_eating_days(), 117.0);
        assert!(close(engine.original_daily_budget().dollars(), 700.0 / 117.0));
    }

    #[test]
    fn test_meals_per_week_scales_total_days() {
        let mut settings = spring_plan();
        settings.meals_per_week = MealsPerWeek::new(14).unwrap();
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 6));
        assert_eq!(engine.total_eating_days(), 244.0);
    }

    #[test]
    fn test_no_end_date_yields_zeroes() {
        let mut settings = spring_plan();
        settings.end_date = None;
        let engine = PacingEngine::new(&settings, &[], date(2025, 2, 1));
        assert_eq!(engine.total_eating_days(), 0.0);
        assert_eq!(engine.original_daily_budget(), Money::zero());
        assert_eq!(engine.eating_days_remaining(), 0.0);
        assert_eq!(engine.budget_per_meal(), Money::zero());
        assert_eq!(engine.ahead_by(), Money::zero());
        assert_eq!(engine.ahead_by_as_of(date(2025, 1, 10)), Money::zero());
    }

    #[test]
    fn test_start_after_end_yields_zeroes() {
        let mut settings = spring_plan();
        settings.end_date = Some(date(2025, 1, 1));
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 6));
        assert_eq!(engine.total_eating_days(), 0.0);
        assert_eq!(engine.ahead_by(), Money::zero());
    }

    #[test]
    fn test_elapsed_days() {
        let settings = spring_plan();
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 16));
        assert_eq!(engine.eating_days_elapsed(), 10.0);
        assert_eq!(engine.eating_days_elapsed_as_of(date(2025, 1, 6)), 0.0);
        assert_eq!(engine.eating_days_elapsed_as_of(date(2024, 12, 1)), 0.0);
        // Counting keeps going past the plan end
        assert_eq!(engine.eating_days_elapsed_as_of(date(2025, 6, 1)), 146.0);
    }

    #[test]
    fn test_elapsed_days_need_an_end_date() {
        let mut settings = spring_plan();
        settings.end_date = None;
        let engine = PacingEngine::new(&settings, &[], date(2025, 2, 1));
        assert_eq!(engine.eating_days_elapsed(), 0.0);
        assert_eq!(engine.eating_days_elapsed_as_of(date(2025, 6, 1)), 0.0);
    }

    #[test]
    fn test_remaining_days_around_plan_edges() {
        let settings = spring_plan();
        let before = PacingEngine::new(&settings, &[], date(2024, 12, 25));
        assert_eq!(before.eating_days_remaining(), 122.0);

        let last_day = PacingEngine::new(&settings, &[], date(2025, 5, 7));
        assert_eq!(last_day.eating_days_remaining(), 1.0);

        // A finished semester reports its whole length
        let txns = vec![spend(61.0, date(2025, 2, 3))];
        let after = PacingEngine::new(&settings, &txns, date(2025, 6, 1));
        assert_eq!(after.eating_days_remaining(), 122.0);
        assert!(close(after.budget_per_meal().dollars(), 639.0 / 122.0));
    }

    #[test]
    fn test_on_pace_spending_keeps_ahead_at_zero() {
        let settings = spring_plan();
        let daily = 700.0 / 122.0;
        let start = date(2025, 1, 6);
        let txns: Vec<_> = (0..10)
            .map(|i| spend(daily, start + chrono::Duration::days(i)))
            .collect();
        let engine = PacingEngine::new(&settings, &txns, date(2025, 1, 16));
        assert!(engine.ahead_by().dollars().abs() < 1e-6);
    }

    #[test]
    fn test_underspending_puts_user_ahead() {
        let settings = spring_plan();
        let txns = vec![spend(10.0, date(2025, 1, 6))];
        let engine = PacingEngine::new(&settings, &txns, date(2025, 1, 11));
        // 5 days elapsed, 10 dollars spent
        let expected = 5.0 * 700.0 / 122.0 - 10.0;
        assert!(close(engine.ahead_by().dollars(), expected));
    }

    #[test]
    fn test_ahead_by_ignores_todays_transactions() {
        let settings = spring_plan();
        let today = date(2025, 1, 11);
        let without = PacingEngine::new(&settings, &[], today).ahead_by();
        let txns = vec![spend(50.0, today)];
        let with = PacingEngine::new(&settings, &txns, today).ahead_by();
        assert_eq!(without, with);
    }

    #[test]
    fn test_ahead_by_as_of_past_and_future() {
        let settings = spring_plan();
        let daily = 700.0 / 122.0;
        let txns = vec![spend(20.0, date(2025, 1, 6)), spend(5.0, date(2025, 1, 9))];
        let engine = PacingEngine::new(&settings, &txns, date(2025, 1, 10));

        // Start of Jan 8: 2 days elapsed, 20 spent
        let past = engine.ahead_by_as_of(date(2025, 1, 8));
        assert!(close(past.dollars(), 2.0 * daily - 20.0));

        // Jan 15: 9 days elapsed, current balance 675
        let future = engine.ahead_by_as_of(date(2025, 1, 15));
        assert!(close(future.dollars(), 675.0 - (700.0 - 9.0 * daily)));

        assert_eq!(engine.ahead_by_as_of(date(2025, 1, 10)), engine.ahead_by());
    }

    #[test]
    fn test_budget_per_meal_tracks_balance() {
        let settings = spring_plan();
        let txns = vec![spend(100.0, date(2025, 1, 6))];
        let engine = PacingEngine::new(&settings, &txns, date(2025, 1, 7));
        assert!(close(engine.budget_per_meal().dollars(), 600.0 / 121.0));
    }
}
