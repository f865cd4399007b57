//! Balance and spend aggregation
//!
//! Transactions are matched to calendar days by their date; time of day and
//! order within a day never matter.

use chrono::NaiveDate;

use super::PacingEngine;
use crate::models::{Money, TransactionKind, Week};

impl PacingEngine<'_> {
    fn sum_of(&self, kind: TransactionKind, on_day: impl Fn(NaiveDate) -> bool) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind && on_day(t.day()))
            .map(|t| t.amount)
            .sum()
    }

    fn running_balance_where(&self, on_day: impl Fn(NaiveDate) -> bool) -> Money {
        self.settings.total
            + self
                .transactions
                .iter()
                .filter(|t| on_day(t.day()))
                .map(|t| t.signed_amount())
                .sum::<Money>()
    }

    /// Unfloored balance after every transaction
    pub fn running_balance(&self) -> Money {
        self.running_balance_where(|_| true)
    }

    /// Unfloored balance at the end of `date`
    pub fn running_balance_through(&self, date: NaiveDate) -> Money {
        self.running_balance_where(|day| day <= date)
    }

    /// Unfloored balance at the start of `date`
    pub fn running_balance_before(&self, date: NaiveDate) -> Money {
        self.running_balance_where(|day| day < date)
    }

    /// Balance shown to the user, never below zero
    pub fn remaining_balance(&self) -> Money {
        self.running_balance().floor_at_zero()
    }

    /// Balance at the end of `date`, never below zero
    pub fn balance_as_of(&self, date: NaiveDate) -> Money {
        self.running_balance_through(date).floor_at_zero()
    }

    pub fn total_spent(&self) -> Money {
        self.sum_of(TransactionKind::Spend, |_| true)
    }

    pub fn total_added(&self) -> Money {
        self.sum_of(TransactionKind::Add, |_| true)
    }

    pub fn spend_up_to_yesterday(&self) -> Money {
        let today = self.today;
        self.sum_of(TransactionKind::Spend, |day| day < today)
    }

    pub fn todays_spending(&self) -> Money {
        let today = self.today;
        self.sum_of(TransactionKind::Spend, |day| day == today)
    }

    pub fn todays_funds_added(&self) -> Money {
        let today = self.today;
        self.sum_of(TransactionKind::Add, |day| day == today)
    }

    /// Spending on days in `[start, end]`; zero when the range is empty
    pub fn spending_between(&self, start: NaiveDate, end: NaiveDate) -> Money {
        self.sum_of(TransactionKind::Spend, |day| day >= start && day <= end)
    }

    /// Spending in the Sunday-to-Saturday week containing `date`
    ///
    /// Days after today are excluded, so a future week always yields zero.
    pub fn weekly_spending_for_week(&self, date: NaiveDate) -> Money {
        let week = Week::containing(date);
        let end = week.end_date().min(self.today);
        self.spending_between(week.start_date(), end)
    }

    /// Spending so far in the current week
    pub fn weekly_spending(&self) -> Money {
        self.weekly_spending_for_week(self.today)
    }
}
