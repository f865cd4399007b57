//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod plan;
pub mod preset;
pub mod status;
pub mod transaction;

pub use config::{handle_config_command, ConfigArgs};
pub use plan::{
    handle_break_command, handle_reset_command, handle_semester_command, handle_setup_command,
    BreakCommands, ResetArgs, SemesterCommands, SetupArgs,
};
pub use preset::{handle_preset_command, PresetCommands};
pub use status::{handle_stats_command, handle_status_command, StatusArgs};
pub use transaction::{
    handle_add_command, handle_delete_command, handle_history_command, handle_spend_command,
    AddArgs, DeleteArgs, HistoryArgs, SpendArgs,
};

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::settings::Settings;
use crate::error::{DiningError, DiningResult};
use crate::models::Money;
use crate::storage::BudgetStore;

/// What every command handler needs: the store, app preferences and "now"
pub struct CliContext<'a> {
    pub store: &'a dyn BudgetStore,
    pub config: &'a Settings,
    pub now: NaiveDateTime,
}

impl<'a> CliContext<'a> {
    pub fn new(store: &'a dyn BudgetStore, config: &'a Settings, now: NaiveDateTime) -> Self {
        Self { store, config, now }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }
}

/// Parse a user-entered amount such as "8.50" or "$8.50"
pub(crate) fn parse_amount(input: &str) -> DiningResult<Money> {
    Money::parse(input)
        .map_err(|e| DiningError::Validation(format!("Invalid amount '{}': {}", input, e)))
}
