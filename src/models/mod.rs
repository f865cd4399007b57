//! Core data models for the dining budget tracker
//!
//! This module contains the data structures the pacing engine reads: the
//! budget plan, transactions, meal presets, calendar weeks and semester
//! templates.

pub mod budget;
pub mod ids;
pub mod money;
pub mod period;
pub mod preset;
pub mod semester;
pub mod transaction;

pub use budget::{Break, BudgetSettings, BudgetValidationError, MealsPerWeek, SettingsPatch};
pub use ids::{PresetId, TransactionId};
pub use money::Money;
pub use period::Week;
pub use preset::MealPreset;
pub use semester::Semester;
pub use transaction::{Transaction, TransactionKind};
