//! Service layer for the dining budget tracker
//!
//! The service layer owns the mutation intents on top of the storage port:
//! validation, overspend policy and logging. Read-only figures come from
//! [`crate::pacing`].

pub mod budget;
pub mod navigation;
pub mod preset;
pub mod transaction;

pub use budget::{BudgetService, Snapshot};
pub use navigation::{can_step, default_selected_date, step, Direction};
pub use preset::PresetService;
pub use transaction::TransactionService;

use crate::error::{DiningError, DiningResult};

/// Index of the one item matching `identifier`
///
/// A short id suffix can match several items; that is an error rather than a
/// guess.
pub(crate) fn unique_match<T>(
    items: &[T],
    identifier: &str,
    matches: impl Fn(&T) -> bool,
) -> DiningResult<Option<usize>> {
    let mut hits = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item))
        .map(|(i, _)| i);

    match (hits.next(), hits.next()) {
        (None, _) => Ok(None),
        (Some(i), None) => Ok(Some(i)),
        (Some(_), Some(_)) => Err(DiningError::Validation(format!(
            "Ambiguous identifier '{}' matches {} entries; use a longer id",
            identifier.trim(),
            2 + hits.count()
        ))),
    }
}
