//! Weekly pacing report with rollover

use chrono::NaiveDate;

use crate::display::report::{
    double_separator, format_bar, format_days, format_money, format_signed, format_status,
    separator,
};
use crate::models::{Money, Week};
use crate::pacing::{PaceStatus, PacingEngine};

#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub week: Week,
    pub week_number: u32,
    /// Week number of the plan's last week, when the plan has an end
    pub total_weeks: Option<u32>,
    pub eating_days: f64,
    pub weekly_budget: Money,
    pub spent: Money,
    /// Rollover accumulated from earlier weeks
    pub carry_in: Money,
    pub ahead_by: Money,
    /// `weekly_budget + carry_in - spent`
    pub remaining: Money,
    pub status: PaceStatus,
    pub is_current: bool,
    pub is_future: bool,
    pub remaining_balance: Money,
    pub days_left: f64,
    pub currency: String,
}

impl WeeklyReport {
    pub fn generate(engine: &PacingEngine<'_>, date: NaiveDate) -> Self {
        let week = Week::containing(date);
        let today_week = Week::containing(engine.today());
        let weekly_budget = engine.weekly_budget(date);
        let spent = engine.weekly_spending_for_week(date);
        let carry_in = engine.weekly_carry_in(date);
        let ahead_by = engine.weekly_ahead_by(date);

        Self {
            week,
            week_number: engine.week_number(date),
            total_weeks: engine.settings().end_date.map(|end| engine.week_number(end)),
            eating_days: engine.eating_days_in_week(date),
            weekly_budget,
            spent,
            carry_in,
            ahead_by,
            remaining: weekly_budget + carry_in - spent,
            status: PaceStatus::with_threshold(ahead_by),
            is_current: week == today_week,
            is_future: week > today_week,
            remaining_balance: engine.remaining_balance(),
            days_left: engine.eating_days_remaining(),
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

        let number = match self.total_weeks {
            Some(total) => format!("Week {} of {}", self.week_number, total),
            None => format!("Week {}", self.week_number),
        };
        let tag = if self.is_current {
            " (this week)"
        } else if self.is_future {
            " (upcoming)"
        } else {
            ""
        };
        output.push_str(&format!("{}: {}{}\n", number, self.week, tag));
        output.push_str(&double_separator(48));
        output.push('\n');

        output.push_str(&format!(
            "{:<22} {:>12}  {}\n",
            "Weekly budget",
            format_money(self.weekly_budget, sym),
            format_status(self.status)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Spent",
            format_money(self.spent, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Rolled over",
            format_signed(self.carry_in, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Left this week",
            format_money(self.remaining, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            if self.ahead_by.is_negative() { "Behind by" } else { "Ahead by" },
            format_signed(self.ahead_by, sym)
        ));

        let available = (self.weekly_budget + self.carry_in).dollars();
        output.push_str(&format!(
            "{} {} eating days\n",
            format_bar(self.spent.dollars(), available, 30),
            format_days(self.eating_days)
        ));

        output.push_str(&separator(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Total remaining",
            format_money(self.remaining_balance, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Days left",
            format_days(self.days_left.round())
        ));

        output
    }
}
