//! In-process store

use std::sync::RwLock;

use super::BudgetStore;
use crate::error::{DiningError, DiningResult};
use crate::models::{BudgetSettings, MealPreset, Transaction};

#[derive(Debug, Default)]
struct MemoryData {
    settings: Option<BudgetSettings>,
    transactions: Vec<Transaction>,
    presets: Vec<MealPreset>,
}

/// A [`BudgetStore`] that never touches the filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<MemoryData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryData) -> T) -> DiningResult<T> {
        let data = self.data.read().map_err(|e| {
            DiningError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(f(&data))
    }

    fn write(&self, f: impl FnOnce(&mut MemoryData)) -> DiningResult<()> {
        let mut data = self.data.write().map_err(|e| {
            DiningError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        f(&mut data);
        Ok(())
    }
}

impl BudgetStore for MemoryStore {
    fn load_settings(&self) -> DiningResult<Option<BudgetSettings>> {
        self.read(|d| d.settings.clone())
    }

    fn save_settings(&self, settings: &BudgetSettings) -> DiningResult<()> {
        self.write(|d| d.settings = Some(settings.clone()))
    }

    fn load_transactions(&self) -> DiningResult<Vec<Transaction>> {
        self.read(|d| d.transactions.clone())
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> DiningResult<()> {
        self.write(|d| d.transactions = transactions.to_vec())
    }

    fn load_presets(&self) -> DiningResult<Vec<MealPreset>> {
        self.read(|d| d.presets.clone())
    }

    fn save_presets(&self, presets: &[MealPreset]) -> DiningResult<()> {
        self.write(|d| d.presets = presets.to_vec())
    }

    fn clear(&self) -> DiningResult<()> {
        self.write(|d| *d = MemoryData::default())
    }
}
