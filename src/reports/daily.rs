//! Daily pacing report
//!
//! What the user may spend on a given day and how far ahead or behind the
//! plan they are.

use chrono::NaiveDate;

use crate::display::report::{
    double_separator, format_days, format_money, format_signed, format_status, separator,
};
use crate::models::Money;
use crate::pacing::{PaceStatus, PacingEngine};

#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_future: bool,
    pub in_plan: bool,
    /// Fixed original daily budget
    pub daily_budget: Money,
    /// Live forecast: remaining balance over remaining eating days
    pub forecast_per_meal: Money,
    pub ahead_by: Money,
    /// Positive part of the buffer that carries into the day
    pub rollover: Money,
    pub can_spend_today: Money,
    pub total_available: Money,
    pub status: PaceStatus,
    pub needs_to_save: bool,
    pub spent_on_date: Money,
    pub funds_added_on_date: Money,
    pub remaining_balance: Money,
    pub days_elapsed: f64,
    pub days_remaining: f64,
    pub currency: String,
}

impl DailyReport {
    pub fn generate(engine: &PacingEngine<'_>, date: NaiveDate) -> Self {
        let today = engine.today();
        let is_today = date == today;
        let daily_budget = engine.original_daily_budget();
        let ahead_by = engine.ahead_by_as_of(date);

        let (spent_on_date, funds_added_on_date) = if is_today {
            (engine.todays_spending(), engine.todays_funds_added())
        } else {
            let funds = engine
                .transactions()
                .iter()
                .filter(|t| t.is_add() && t.day() == date)
                .map(|t| t.amount)
                .sum();
            (engine.spending_between(date, date), funds)
        };

        let total_available = if is_today {
            daily_budget + ahead_by + funds_added_on_date - spent_on_date
        } else {
            daily_budget + ahead_by
        };
        let status = if is_today {
            PaceStatus::relative_to_budget(total_available, daily_budget)
        } else {
            PaceStatus::relative_to_budget(ahead_by, daily_budget)
        };
        let rollover = ahead_by.floor_at_zero();

        Self {
            date,
            is_today,
            is_future: date > today,
            in_plan: engine.settings().contains(date),
            daily_budget,
            forecast_per_meal: engine.budget_per_meal(),
            ahead_by,
            rollover,
            can_spend_today: daily_budget + rollover,
            total_available,
            status,
            needs_to_save: total_available.is_negative(),
            spent_on_date,
            funds_added_on_date,
            remaining_balance: engine.remaining_balance(),
            days_elapsed: engine.eating_days_elapsed_as_of(date),
            days_remaining: engine.eating_days_remaining(),
            currency: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_string();
        self
    }

    pub fn format_terminal(&self) -> String {
        let sym = self.currency.as_str();
        let mut output = String::new();

        let tag = if self.is_today {
            " (today)"
        } else if self.is_future {
            " (upcoming)"
        } else {
            ""
        };
        output.push_str(&format!(
            "Daily Budget: {}{}\n",
            self.date.format("%a %b %-d, %Y"),
            tag
        ));
        output.push_str(&double_separator(48));
        output.push('\n');

        if !self.in_plan {
            output.push_str("This date is outside the budget plan.\n");
        }

        let label = if self.is_today { "Available today" } else { "Available" };
        output.push_str(&format!(
            "{:<22} {:>12}  {}\n",
            label,
            format_money(self.total_available, sym),
            format_status(self.status)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Daily budget",
            format_money(self.daily_budget, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            if self.ahead_by.is_negative() { "Behind by" } else { "Ahead by" },
            format_signed(self.ahead_by, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Can spend (rollover)",
            format_money(self.can_spend_today, sym)
        ));

        if self.is_today || !self.is_future {
            output.push_str(&format!(
                "{:<22} {:>12}\n",
                "Spent",
                format_money(self.spent_on_date, sym)
            ));
        }
        if !self.funds_added_on_date.is_zero() {
            output.push_str(&format!(
                "{:<22} {:>12}\n",
                "Funds added",
                format_money(self.funds_added_on_date, sym)
            ));
        }

        output.push_str(&separator(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Remaining balance",
            format_money(self.remaining_balance, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Forecast per meal",
            format_money(self.forecast_per_meal, sym)
        ));
        output.push_str(&format!(
            "Eating days: {} elapsed, {} remaining\n",
            format_days(self.days_elapsed),
            format_days(self.days_remaining)
        ));

        if self.needs_to_save {
            output.push_str(&format!(
                "\nOver budget by {}. Spend less over the coming days to catch up.\n",
                format_money(self.total_available.abs(), sym)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetSettings, Transaction};

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

    /// 10 days at $10/day from Mon 2025-01-06
    fn plan() -> BudgetSettings {
        let mut settings = BudgetSettings::starting(date(2025, 1, 6));
        settings.total = Money::from_dollars(100.0);
        settings.end_date = Some(date(2025, 1, 15));
        settings
    }

    #[test]
    fn test_today_subtracts_todays_spending() {
        let settings = plan();
        let today = date(2025, 1, 8);
        // Two days elapsed, 15 spent: ahead by 5
        let txns = vec![spend(15.0, date(2025, 1, 6)), spend(4.0, today)];
        let engine = PacingEngine::new(&settings, &txns, today);

        let report = DailyReport::generate(&engine, today);
        assert!(report.is_today);
        assert!((report.ahead_by.dollars() - 5.0).abs() < EPS);
        assert!((report.total_available.dollars() - 11.0).abs() < EPS);
        assert!((report.can_spend_today.dollars() - 15.0).abs() < EPS);
        assert_eq!(report.status, PaceStatus::Ahead);
        assert!(!report.needs_to_save);
    }

    #[test]
    fn test_overspent_today_needs_to_save() {
        let settings = plan();
        let today = date(2025, 1, 6);
        let txns = vec![spend(25.0, today)];
        let engine = PacingEngine::new(&settings, &txns, today);

        let report = DailyReport::generate(&engine, today);
        assert!((report.total_available.dollars() + 15.0).abs() < EPS);
        assert_eq!(report.status, PaceStatus::Behind);
        assert!(report.needs_to_save);
        assert!(report.format_terminal().contains("Over budget by $15.00"));
    }

    #[test]
    fn test_other_dates_use_ahead_by() {
        let settings = plan();
        let today = date(2025, 1, 10);
        let txns = vec![spend(30.0, date(2025, 1, 6))];
        let engine = PacingEngine::new(&settings, &txns, today);

        // Start of Jan 8: 2 days elapsed, 30 spent
        let past = DailyReport::generate(&engine, date(2025, 1, 8));
        assert!((past.ahead_by.dollars() + 10.0).abs() < EPS);
        assert!(past.total_available.dollars().abs() < EPS);
        assert_eq!(past.status, PaceStatus::Behind);
        assert_eq!(past.rollover, Money::zero());
        assert!((past.can_spend_today.dollars() - 10.0).abs() < EPS);

        let future = DailyReport::generate(&engine, date(2025, 1, 12));
        assert!(future.is_future);
        // Six days elapsed by Jan 12 against the current balance of 70
        assert!((future.ahead_by.dollars() - 30.0).abs() < EPS);
        assert_eq!(future.status, PaceStatus::Ahead);
    }

    #[test]
    fn test_format_terminal() {
        let settings = plan();
        let today = date(2025, 1, 6);
        let engine = PacingEngine::new(&settings, &[], today);
        let output = DailyReport::generate(&engine, today)
            .with_currency("€")
            .format_terminal();

        assert!(output.contains("Mon Jan 6, 2025 (today)"));
        assert!(output.contains("€10.00"));
        assert!(output.contains("[On track]"));
        assert!(output.contains("0 elapsed, 10 remaining"));
    }

    #[test]
    fn test_outside_plan_is_flagged() {
        let settings = plan();
        let engine = PacingEngine::new(&settings, &[], date(2025, 1, 6));
        let report = DailyReport::generate(&engine, date(2025, 2, 1));
        assert!(!report.in_plan);
        assert!(report.format_terminal().contains("outside the budget plan"));
    }
}
