//! Transaction model
//!
//! A transaction is an immutable spend or funding event. Its timestamp is
//! stamped when it is created and is never edited afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Note used for spends logged without one
pub const DEFAULT_SPEND_NOTE: &str = "Purchase";

/// Note used for funds added to the balance
pub const DEFAULT_ADD_NOTE: &str = "Added funds";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money spent on food
    Spend,
    /// Money added to the balance
    Add,
}

impl TransactionKind {
    pub fn default_note(&self) -> &'static str {
        match self {
            Self::Spend => DEFAULT_SPEND_NOTE,
            Self::Add => DEFAULT_ADD_NOTE,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spend => write!(f, "Spend"),
            Self::Add => write!(f, "Add"),
        }
    }
}

/// A spend or funding event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Always positive; the kind carries the sign
    pub amount: Money,

    #[serde(default)]
    pub note: String,

    /// Local wall-clock time the transaction was logged
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction stamped at `at`
    ///
    /// An empty note is replaced by the kind's placeholder.
    pub fn new(kind: TransactionKind, amount: Money, note: impl Into<String>, at: NaiveDateTime) -> Self {
        let note = note.into();
        let note = if note.trim().is_empty() {
            kind.default_note().to_string()
        } else {
            note.trim().to_string()
        };

        Self {
            id: TransactionId::new(),
            kind,
            amount,
            note,
            date: at,
        }
    }

    pub fn spend(amount: Money, note: impl Into<String>, at: NaiveDateTime) -> Self {
        Self::new(TransactionKind::Spend, amount, note, at)
    }

    pub fn add(amount: Money, at: NaiveDateTime) -> Self {
        Self::new(TransactionKind::Add, amount, DEFAULT_ADD_NOTE, at)
    }

    pub fn is_spend(&self) -> bool {
        self.kind == TransactionKind::Spend
    }

    pub fn is_add(&self) -> bool {
        self.kind == TransactionKind::Add
    }

    /// Calendar day the transaction belongs to
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Effect on the balance: positive for adds, negative for spends
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Spend => -self.amount,
            TransactionKind::Add => self.amount,
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(
                self.amount.dollars(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d %H:%M"),
            self.note,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    NonPositiveAmount(f64),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
