//! Meal preset model
//!
//! A preset is a named shortcut for logging a common purchase. It has no
//! effect on pacing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PresetId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPreset {
    pub id: PresetId,
    pub name: String,
    pub amount: Money,
}

impl MealPreset {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: PresetId::new(),
            name: name.into().trim().to_string(),
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), PresetValidationError> {
        if self.name.trim().is_empty() {
            return Err(PresetValidationError::EmptyName);
        }
        if !self.amount.is_finite() || !self.amount.is_positive() {
            return Err(PresetValidationError::NonPositiveAmount(
                self.amount.dollars(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for MealPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {}", self.name, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresetValidationError {
    EmptyName,
    NonPositiveAmount(f64),
}

impl fmt::Display for PresetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Preset name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Preset amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for PresetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let preset = MealPreset::new("  Coffee ", Money::from_dollars(3.25));
        assert_eq!(preset.name, "Coffee");
        assert_eq!(preset.to_string(), "Coffee · $3.25");
    }

    #[test]
    fn test_validation() {
        assert!(MealPreset::new("Coffee", Money::from_dollars(3.25)).validate().is_ok());
        assert_eq!(
            MealPreset::new("   ", Money::from_dollars(3.25)).validate(),
            Err(PresetValidationError::EmptyName)
        );
        assert!(MealPreset::new("Coffee", Money::zero()).validate().is_err());
    }
}
