//! JSON file store
//!
//! One file per collection under the data directory:
//! `settings.json`, `transactions.json` and `presets.json`.

use tracing::debug;

use super::file_io::{read_json, read_json_opt, remove_if_exists, write_json_atomic};
use super::{BudgetStore, PresetData, TransactionData};
use crate::config::paths::DiningPaths;
use crate::error::DiningResult;
use crate::models::{BudgetSettings, MealPreset, Transaction};

#[derive(Debug, Clone)]
pub struct JsonStore {
    paths: DiningPaths,
}

impl JsonStore {
    /// Create a store, making sure the data directory exists
    pub fn new(paths: DiningPaths) -> DiningResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &DiningPaths {
        &self.paths
    }
}

impl BudgetStore for JsonStore {
    fn load_settings(&self) -> DiningResult<Option<BudgetSettings>> {
        let path = self.paths.budget_settings_file();
        let settings: Option<BudgetSettings> = read_json_opt(&path)?;
        debug!(path = %path.display(), found = settings.is_some(), "loaded budget settings");
        Ok(settings)
    }

    fn save_settings(&self, settings: &BudgetSettings) -> DiningResult<()> {
        write_json_atomic(self.paths.budget_settings_file(), settings)
    }

    fn load_transactions(&self) -> DiningResult<Vec<Transaction>> {
        let path = self.paths.transactions_file();
        let data: TransactionData = read_json(&path)?;
        debug!(path = %path.display(), count = data.transactions.len(), "loaded transactions");
        Ok(data.transactions)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> DiningResult<()> {
        let data = TransactionData {
            transactions: transactions.to_vec(),
        };
        write_json_atomic(self.paths.transactions_file(), &data)
    }

    fn load_presets(&self) -> DiningResult<Vec<MealPreset>> {
        let path = self.paths.presets_file();
        let data: PresetData = read_json(&path)?;
        debug!(path = %path.display(), count = data.presets.len(), "loaded presets");
        Ok(data.presets)
    }

    fn save_presets(&self, presets: &[MealPreset]) -> DiningResult<()> {
        let data = PresetData {
            presets: presets.to_vec(),
        };
        write_json_atomic(self.paths.presets_file(), &data)
    }

    fn clear(&self) -> DiningResult<()> {
        remove_if_exists(self.paths.budget_settings_file())?;
        remove_if_exists(self.paths.transactions_file())?;
        remove_if_exists(self.paths.presets_file())?;
        debug!(dir = %self.paths.data_dir().display(), "cleared data files");
        Ok(())
    }
}
