//! Budget plan service
//!
//! Owns edits to the plan: validated patches, semester templates, breaks and
//! the full reset.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{DiningError, DiningResult};
use crate::models::semester::find_semester;
use crate::models::{Break, BudgetSettings, SettingsPatch, Transaction};
use crate::pacing::PacingEngine;
use crate::storage::BudgetStore;

/// Plan and transactions loaded together for reporting
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub settings: BudgetSettings,
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    pub fn engine(&self, today: NaiveDate) -> PacingEngine<'_> {
        PacingEngine::new(&self.settings, &self.transactions, today)
    }
}

/// Service for plan management
pub struct BudgetService<'a> {
    store: &'a dyn BudgetStore,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a dyn BudgetStore) -> Self {
        Self { store }
    }

    /// The saved plan, or a fresh one starting on `today`
    pub fn settings(&self, today: NaiveDate) -> DiningResult<BudgetSettings> {
        self.store.load_settings_or_default(today)
    }

    pub fn snapshot(&self, today: NaiveDate) -> DiningResult<Snapshot> {
        Ok(Snapshot {
            settings: self.settings(today)?,
            transactions: self.store.load_transactions()?,
        })
    }

    /// Apply a patch and persist the result
    ///
    /// The stored plan is untouched when validation fails.
    pub fn save_settings(
        &self,
        patch: SettingsPatch,
        today: NaiveDate,
    ) -> DiningResult<BudgetSettings> {
        let current = self.settings(today)?;
        let updated = patch
            .apply(&current)
            .map_err(|e| DiningError::Validation(e.to_string()))?;

        self.store.save_settings(&updated)?;
        info!(
            total = %updated.total,
            start = %updated.start_date,
            end = ?updated.end_date,
            meals_per_week = updated.meals_per_week.get(),
            breaks = updated.breaks.len(),
            "saved budget settings"
        );

        Ok(updated)
    }

    /// Overwrite dates and breaks from a built-in semester
    pub fn apply_semester(&self, id: &str, today: NaiveDate) -> DiningResult<BudgetSettings> {
        let semester = find_semester(id).ok_or_else(|| DiningError::semester_not_found(id))?;

        let patch = SettingsPatch::new()
            .start_date(semester.start_date)
            .end_date(semester.end_date)
            .breaks(semester.breaks)
            .semester(semester.id);

        self.save_settings(patch, today)
    }

    pub fn add_break(&self, brk: Break, today: NaiveDate) -> DiningResult<BudgetSettings> {
        let mut breaks = self.settings(today)?.breaks;
        breaks.push(brk);
        self.save_settings(SettingsPatch::new().breaks(breaks), today)
    }

    /// Remove the break at `index` (0-based), returning it
    pub fn remove_break(&self, index: usize, today: NaiveDate) -> DiningResult<Break> {
        let mut breaks = self.settings(today)?.breaks;
        if index >= breaks.len() {
            return Err(DiningError::NotFound {
                entity_type: "Break",
                identifier: (index + 1).to_string(),
            });
        }

        let removed = breaks.remove(index);
        self.save_settings(SettingsPatch::new().breaks(breaks), today)?;
        Ok(removed)
    }

    /// Delete the plan, every transaction and every preset
    pub fn reset(&self) -> DiningResult<()> {
        self.store.clear()?;
        info!("reset all budget data");
        Ok(())
    }
}
