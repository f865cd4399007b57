//! Storage layer for the dining budget tracker
//!
//! The services talk to persistence through the [`BudgetStore`] port. Two
//! stores ship with the crate: [`JsonStore`] keeps one JSON file per
//! collection under the data directory, and [`MemoryStore`] keeps everything
//! in process for tests and embedding.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, read_json_opt, write_json_atomic};
pub use json::JsonStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::DiningResult;
use crate::models::{BudgetSettings, MealPreset, Transaction};

/// Persistence port for the plan, the transaction log and meal presets
///
/// Every save replaces the whole collection.
pub trait BudgetStore {
    /// The saved plan, or `None` if none has been saved yet
    fn load_settings(&self) -> DiningResult<Option<BudgetSettings>>;

    fn save_settings(&self, settings: &BudgetSettings) -> DiningResult<()>;

    fn load_transactions(&self) -> DiningResult<Vec<Transaction>>;

    fn save_transactions(&self, transactions: &[Transaction]) -> DiningResult<()>;

    fn load_presets(&self) -> DiningResult<Vec<MealPreset>>;

    fn save_presets(&self, presets: &[MealPreset]) -> DiningResult<()>;

    /// Remove every stored collection
    fn clear(&self) -> DiningResult<()>;

    /// The saved plan, or a fresh one starting on `today`
    fn load_settings_or_default(&self, today: NaiveDate) -> DiningResult<BudgetSettings> {
        Ok(self
            .load_settings()?
            .unwrap_or_else(|| BudgetSettings::starting(today)))
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct TransactionData {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct PresetData {
    pub presets: Vec<MealPreset>,
}
