//! Transaction service
//!
//! Logs spends and fund additions, applying the overspend policy, and deletes
//! entries from the log. Transactions are never edited.

use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::unique_match;
use crate::config::settings::OverspendPolicy;
use crate::error::{DiningError, DiningResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::pacing::PacingEngine;
use crate::storage::BudgetStore;

pub struct TransactionService<'a> {
    store: &'a dyn BudgetStore,
    policy: OverspendPolicy,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn BudgetStore, policy: OverspendPolicy) -> Self {
        Self { store, policy }
    }

    /// Record a transaction stamped at `now`
    ///
    /// An empty note falls back to the kind's placeholder.
    pub fn add_transaction(
        &self,
        kind: TransactionKind,
        amount: Money,
        note: &str,
        now: NaiveDateTime,
    ) -> DiningResult<Transaction> {
        if !amount.is_finite() || !amount.is_positive() {
            return Err(DiningError::Validation(format!(
                "Amount must be greater than zero, got {}",
                amount.dollars()
            )));
        }

        let mut transactions = self.store.load_transactions()?;

        if kind == TransactionKind::Spend {
            let settings = self.store.load_settings_or_default(now.date())?;
            let remaining =
                PacingEngine::new(&settings, &transactions, now.date()).remaining_balance();
            if amount > remaining {
                self.check_overspend(amount, remaining)?;
            }
        }

        let txn = Transaction::new(kind, amount, note, now);
        txn.validate()
            .map_err(|e| DiningError::Validation(e.to_string()))?;

        transactions.push(txn.clone());
        self.store.save_transactions(&transactions)?;
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "recorded transaction");

        Ok(txn)
    }

    fn check_overspend(&self, amount: Money, remaining: Money) -> DiningResult<()> {
        match self.policy {
            OverspendPolicy::Allow => Ok(()),
            OverspendPolicy::Warn => {
                warn!(%amount, %remaining, "spend exceeds remaining balance");
                Ok(())
            }
            OverspendPolicy::Block => Err(DiningError::InsufficientFunds {
                needed: amount.to_string(),
                available: remaining.to_string(),
            }),
        }
    }

    pub fn spend(&self, amount: Money, note: &str, now: NaiveDateTime) -> DiningResult<Transaction> {
        self.add_transaction(TransactionKind::Spend, amount, note, now)
    }

    pub fn add_funds(
        &self,
        amount: Money,
        note: &str,
        now: NaiveDateTime,
    ) -> DiningResult<Transaction> {
        self.add_transaction(TransactionKind::Add, amount, note, now)
    }

    /// Delete by full id, short id or id suffix
    pub fn delete_transaction(&self, identifier: &str) -> DiningResult<Transaction> {
        let mut transactions = self.store.load_transactions()?;
        let index = unique_match(&transactions, identifier, |t| t.id.matches(identifier))?
            .ok_or_else(|| DiningError::transaction_not_found(identifier))?;

        let removed = transactions.remove(index);
        self.store.save_transactions(&transactions)?;
        info!(id = %removed.id, amount = %removed.amount, "deleted transaction");

        Ok(removed)
    }

    /// Transactions newest first, optionally truncated
    pub fn list(&self, limit: Option<usize>) -> DiningResult<Vec<Transaction>> {
        let mut transactions = self.store.load_transactions()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }
}
