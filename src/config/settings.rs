//! App preferences for the dining budget tracker
//!
//! These are display and policy preferences, separate from the budget plan
//! itself (see [`crate::models::BudgetSettings`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::DiningPaths;
use crate::error::DiningError;

/// What to do when a spend exceeds the remaining balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverspendPolicy {
    /// Record the spend silently
    Allow,
    /// Record the spend and log a warning
    Warn,
    /// Refuse the spend
    #[default]
    Block,
}

impl fmt::Display for OverspendPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Allow => "allow",
            Self::Warn => "warn",
            Self::Block => "block",
        };
        f.pad(name)
    }
}

impl FromStr for OverspendPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "warn" => Ok(Self::Warn),
            "block" => Ok(Self::Block),
            other => Err(format!(
                "unknown overspend policy '{}' (expected allow, warn or block)",
                other
            )),
        }
    }
}

/// Which pacing view `dining status` shows without flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Daily,
    Weekly,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        })
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("unknown view '{}' (expected daily or weekly)", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub overspend_policy: OverspendPolicy,

    /// Note used for spends logged without one
    #[serde(default = "default_spend_note")]
    pub default_spend_note: String,

    #[serde(default)]
    pub default_view: ViewMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_spend_note() -> String {
    crate::models::transaction::DEFAULT_SPEND_NOTE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            overspend_policy: OverspendPolicy::default(),
            default_spend_note: default_spend_note(),
            default_view: ViewMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &DiningPaths) -> Result<Self, DiningError> {
        let settings_path = paths.config_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DiningError::Io(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DiningError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save(&self, paths: &DiningPaths) -> Result<(), DiningError> {
        paths.ensure_directories()?;
        crate::storage::write_json_atomic(paths.config_file(), self)
    }
}
