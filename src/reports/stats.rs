//! Spending statistics
//!
//! Overall totals, the most frequent purchases and spending by weekday.

use chrono::Datelike;
use std::collections::HashMap;

use crate::display::report::{
    double_separator, format_bar, format_money, format_percentage, truncate,
};
use crate::models::Money;
use crate::pacing::PacingEngine;

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const TOP_ITEMS: usize = 5;

/// Spending grouped by note
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStat {
    pub name: String,
    pub count: usize,
    pub total: Money,
}

#[derive(Debug, Clone)]
pub struct StatsReport {
    pub total_budget: Money,
    pub total_spent: Money,
    pub remaining_balance: Money,
    /// Remaining balance as a share of the budget, capped at 100
    pub percent_remaining: f64,
    pub spend_count: usize,
    /// Largest totals first, at most five
    pub top_items: Vec<ItemStat>,
    /// Indexed Sunday (0) through Saturday (6)
    pub by_weekday: [Money; 7],
    pub currency: String,
}

impl StatsReport {
    pub fn generate(engine: &PacingEngine<'_>) -> Self {
        let total_budget = engine.settings().total;
        let remaining_balance = engine.remaining_balance();

        let mut items: HashMap<&str, (usize, Money)> = HashMap::new();
        let mut by_weekday = [Money::zero(); 7];
        let mut spend_count = 0;

        for txn in engine.transactions().iter().filter(|t| t.is_spend()) {
            let name = if txn.note.is_empty() {
                "Unknown"
            } else {
                txn.note.as_str()
            };
            let entry = items.entry(name).or_insert((0, Money::zero()));
            entry.0 += 1;
            entry.1 += txn.amount;

            by_weekday[txn.day().weekday().num_days_from_sunday() as usize] += txn.amount;
            spend_count += 1;
        }

        let mut top_items: Vec<ItemStat> = items
            .into_iter()
            .map(|(name, (count, total))| ItemStat {
                name: name.to_string(),
                count,
                total,
            })
            .collect();
        top_items.sort_by(|a, b| {
            b.total
                .dollars()
                .total_cmp(&a.total.dollars())
                .then_with(|| a.name.cmp(&b.name))
        });
        top_items.truncate(TOP_ITEMS);

        let percent_remaining = if total_budget.is_positive() {
            (remaining_balance.dollars() / total_budget.dollars() * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            total_budget,
            total_spent: engine.total_spent(),
            remaining_balance,
            percent_remaining,
            spend_count,
            top_items,
            by_weekday,
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

        output.push_str("Overview\n");
        output.push_str(&double_separator(48));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Total budget",
            format_money(self.total_budget, sym)
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Spent",
            format!("-{}", format_money(self.total_spent, sym))
        ));
        output.push_str(&format!(
            "{:<22} {:>12}\n",
            "Remaining",
            format_money(self.remaining_balance, sym)
        ));
        output.push_str(&format!(
            "{} {} left\n",
            format_bar(self.percent_remaining, 100.0, 30),
            format_percentage(self.percent_remaining)
        ));

        if self.spend_count == 0 {
            output.push_str("\nLog some purchases to see your stats!\n");
            return output;
        }

        output.push_str("\nTop Purchases\n");
        let top_total: f64 = self.top_items.iter().map(|i| i.total.dollars()).sum();
        for (rank, item) in self.top_items.iter().enumerate() {
            output.push_str(&format!(
                "{}. {:<20} {:>3}x {:>10} {}\n",
                rank + 1,
                truncate(&item.name, 20),
                item.count,
                format_money(item.total, sym),
                format_bar(item.total.dollars(), top_total, 12)
            ));
        }

        output.push_str("\nSpending by Day\n");
        let max_day = self
            .by_weekday
            .iter()
            .map(|m| m.dollars())
            .fold(1.0_f64, f64::max);
        for (name, amount) in WEEKDAY_NAMES.iter().zip(self.by_weekday.iter()) {
            output.push_str(&format!(
                "{} {} {:>10}\n",
                name,
                format_bar(amount.dollars(), max_day, 20),
                format_money(*amount, sym)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetSettings, Transaction};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn at(d: u32) -> chrono::NaiveDateTime {
        day(d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn plan() -> BudgetSettings {
        let mut settings = BudgetSettings::starting(day(5));
        settings.total = Money::from_dollars(200.0);
        settings.end_date = NaiveDate::from_ymd_opt(2025, 2, 5);
        settings
    }

    fn spend(amount: f64, note: &str, d: u32) -> Transaction {
        Transaction::spend(Money::from_dollars(amount), note, at(d))
    }

    #[test]
    fn test_top_items_ranked_by_total() {
        let settings = plan();
        let txns = vec![
            spend(3.0, "Coffee", 6),
            spend(3.0, "Coffee", 7),
            spend(3.0, "Coffee", 8),
            spend(12.0, "Pizza", 6),
            spend(4.0, "Bagel", 7),
            spend(5.0, "Salad", 8),
            spend(1.0, "Gum", 9),
            spend(2.0, "Soda", 9),
            Transaction::add(Money::from_dollars(100.0), at(9)),
        ];
        let engine = PacingEngine::new(&settings, &txns, day(10));
        let report = StatsReport::generate(&engine);

        assert_eq!(report.spend_count, 8);
        assert_eq!(report.top_items.len(), 5);
        assert_eq!(report.top_items[0].name, "Pizza");
        assert_eq!(report.top_items[1].name, "Coffee");
        assert_eq!(report.top_items[1].count, 3);
        assert_eq!(report.top_items[1].total, Money::from_dollars(9.0));
        assert!(report.top_items.iter().all(|i| i.name != "Gum"));
        assert_eq!(report.total_spent, Money::from_dollars(33.0));
    }

    #[test]
    fn test_spending_by_weekday() {
        let settings = plan();
        // Jan 5 2025 is a Sunday, Jan 11 a Saturday
        let txns = vec![
            spend(7.0, "Brunch", 5),
            spend(2.0, "Snack", 11),
            spend(3.0, "Snack", 12),
        ];
        let engine = PacingEngine::new(&settings, &txns, day(12));
        let report = StatsReport::generate(&engine);

        assert_eq!(report.by_weekday[0], Money::from_dollars(10.0));
        assert_eq!(report.by_weekday[6], Money::from_dollars(2.0));
        assert_eq!(report.by_weekday[3], Money::zero());
    }

    #[test]
    fn test_percent_remaining_is_capped() {
        let settings = plan();
        let txns = vec![Transaction::add(Money::from_dollars(50.0), at(6))];
        let engine = PacingEngine::new(&settings, &txns, day(7));
        let report = StatsReport::generate(&engine);
        assert_eq!(report.percent_remaining, 100.0);
        assert!(report.format_terminal().contains("Log some purchases"));
    }

    #[test]
    fn test_format_terminal_lists_days() {
        let settings = plan();
        let txns = vec![spend(50.0, "Groceries", 6)];
        let engine = PacingEngine::new(&settings, &txns, day(7));
        let output = StatsReport::generate(&engine).format_terminal();

        assert!(output.contains("1. Groceries"));
        assert!(output.contains("-$50.00"));
        assert!(output.contains("75% left"));
        for name in WEEKDAY_NAMES {
            assert!(output.contains(name));
        }
    }
}
