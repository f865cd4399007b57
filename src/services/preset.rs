//! Meal preset service
//!
//! Presets are shortcuts for common purchases. Logging one records a spend
//! with the preset's name as the note.

use chrono::NaiveDateTime;
use tracing::info;

use super::transaction::TransactionService;
use super::unique_match;
use crate::error::{DiningError, DiningResult};
use crate::models::{MealPreset, Money, Transaction};
use crate::storage::BudgetStore;

pub struct PresetService<'a> {
    store: &'a dyn BudgetStore,
}

impl<'a> PresetService<'a> {
    pub fn new(store: &'a dyn BudgetStore) -> Self {
        Self { store }
    }

    pub fn add(&self, name: &str, amount: Money) -> DiningResult<MealPreset> {
        let preset = MealPreset::new(name, amount);
        preset
            .validate()
            .map_err(|e| DiningError::Validation(e.to_string()))?;

        let mut presets = self.store.load_presets()?;
        presets.push(preset.clone());
        self.store.save_presets(&presets)?;
        info!(id = %preset.id, name = %preset.name, amount = %preset.amount, "added preset");

        Ok(preset)
    }

    pub fn list(&self) -> DiningResult<Vec<MealPreset>> {
        self.store.load_presets()
    }

    /// Find a preset by id or by name (case-insensitive)
    pub fn find(&self, identifier: &str) -> DiningResult<Option<MealPreset>> {
        let presets = self.store.load_presets()?;
        let wanted = identifier.trim().to_lowercase();

        if let Some(i) = unique_match(&presets, identifier, |p| p.id.matches(identifier))? {
            return Ok(Some(presets[i].clone()));
        }
        // Names are not unique; the first match wins
        Ok(presets.into_iter().find(|p| p.name.to_lowercase() == wanted))
    }

    pub fn delete(&self, identifier: &str) -> DiningResult<MealPreset> {
        let preset = self
            .find(identifier)?
            .ok_or_else(|| DiningError::preset_not_found(identifier))?;

        let mut presets = self.store.load_presets()?;
        presets.retain(|p| p.id != preset.id);
        self.store.save_presets(&presets)?;
        info!(id = %preset.id, name = %preset.name, "deleted preset");

        Ok(preset)
    }

    /// Record a spend for the preset's amount
    pub fn log(
        &self,
        identifier: &str,
        transactions: &TransactionService<'_>,
        now: NaiveDateTime,
    ) -> DiningResult<Transaction> {
        let preset = self
            .find(identifier)?
            .ok_or_else(|| DiningError::preset_not_found(identifier))?;

        transactions.spend(preset.amount, &preset.name, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::OverspendPolicy;
    use crate::models::PresetId;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_add_validates() {
        let store = MemoryStore::new();
        let service = PresetService::new(&store);

        assert!(service.add("   ", Money::from_dollars(3.0)).unwrap_err().is_validation());
        assert!(service.add("Coffee", Money::zero()).unwrap_err().is_validation());

        let preset = service.add("  Coffee ", Money::from_dollars(3.25)).unwrap();
        assert_eq!(preset.name, "Coffee");
        assert_eq!(service.list().unwrap(), vec![preset]);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let store = MemoryStore::new();
        let service = PresetService::new(&store);
        let bagel = service.add("Bagel", Money::from_dollars(4.0)).unwrap();

        assert_eq!(service.find("bagel").unwrap(), Some(bagel.clone()));
        assert_eq!(service.find(&bagel.id.short()).unwrap(), Some(bagel));
        assert_eq!(service.find("Pizza").unwrap(), None);
    }

    #[test]
    fn test_find_with_ambiguous_suffix_is_an_error() {
        let store = MemoryStore::new();
        let service = PresetService::new(&store);
        let mut presets = Vec::new();
        for (name, uuid) in [
            ("Bagel", "0190a1b2-0000-7000-8000-0000000000c1"),
            ("Wrap", "0190a1b2-0000-7000-8000-0000000000d1"),
        ] {
            let mut preset = MealPreset::new(name, Money::from_dollars(4.0));
            preset.id = PresetId::from(Uuid::parse_str(uuid).unwrap());
            presets.push(preset);
        }
        store.save_presets(&presets).unwrap();

        assert!(service.find("1").unwrap_err().is_validation());
        assert!(service.delete("1").unwrap_err().is_validation());
        assert_eq!(service.list().unwrap().len(), 2);
        assert_eq!(service.find("d1").unwrap().map(|p| p.name), Some("Wrap".to_string()));
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let service = PresetService::new(&store);
        service.add("Bagel", Money::from_dollars(4.0)).unwrap();
        let smoothie = service.add("Smoothie", Money::from_dollars(6.5)).unwrap();

        assert_eq!(service.delete("bagel").unwrap().name, "Bagel");
        assert_eq!(service.list().unwrap(), vec![smoothie]);
        assert!(service.delete("bagel").unwrap_err().is_not_found());
    }

    #[test]
    fn test_log_records_spend_named_after_preset() {
        let store = MemoryStore::new();
        let presets = PresetService::new(&store);
        let transactions = TransactionService::new(&store, OverspendPolicy::Allow);
        presets.add("Smoothie", Money::from_dollars(6.5)).unwrap();

        let txn = presets.log("smoothie", &transactions, now()).unwrap();
        assert!(txn.is_spend());
        assert_eq!(txn.note, "Smoothie");
        assert_eq!(txn.amount, Money::from_dollars(6.5));
        assert_eq!(store.load_transactions().unwrap(), vec![txn]);
    }

    #[test]
    fn test_log_respects_block_policy() {
        let store = MemoryStore::new();
        let presets = PresetService::new(&store);
        let transactions = TransactionService::new(&store, OverspendPolicy::Block);
        presets.add("Steak", Money::from_dollars(40.0)).unwrap();

        let err = presets.log("Steak", &transactions, now()).unwrap_err();
        assert!(matches!(err, DiningError::InsufficientFunds { .. }));
    }
}
