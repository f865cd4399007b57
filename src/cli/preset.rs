//! Meal preset CLI commands

use clap::Subcommand;

use super::transaction::print_balance_after;
use super::{parse_amount, CliContext};
use crate::display::format_preset_list;
use crate::display::report::format_money;
use crate::error::DiningResult;
use crate::services::{PresetService, TransactionService};

/// Preset subcommands
#[derive(Subcommand)]
pub enum PresetCommands {
    /// Save a preset
    Add {
        /// Preset name, also used as the spend note
        name: String,
        /// Price (e.g. "3.25")
        amount: String,
    },

    /// List presets
    List,

    /// Delete a preset
    Remove {
        /// Preset name or ID
        preset: String,
    },

    /// Log a spend for a preset
    Use {
        /// Preset name or ID
        preset: String,
    },
}

/// Handle `dining preset`
pub fn handle_preset_command(ctx: &CliContext<'_>, cmd: PresetCommands) -> DiningResult<()> {
    let service = PresetService::new(ctx.store);

    match cmd {
        PresetCommands::Add { name, amount } => {
            let preset = service.add(&name, parse_amount(&amount)?)?;
            println!(
                "Saved preset: {} ({})",
                preset.name,
                format_money(preset.amount, ctx.currency())
            );
            println!("  ID: {}", preset.id);
        }

        PresetCommands::List => {
            print!("{}", format_preset_list(&service.list()?));
        }

        PresetCommands::Remove { preset } => {
            let removed = service.delete(&preset)?;
            println!("Deleted preset: {}", removed.name);
        }

        PresetCommands::Use { preset } => {
            let transactions = TransactionService::new(ctx.store, ctx.config.overspend_policy);
            let txn = service.log(&preset, &transactions, ctx.now)?;
            println!(
                "Spent {} on {}",
                format_money(txn.amount, ctx.currency()),
                txn.note
            );
            print_balance_after(ctx, &txn)?;
        }
    }

    Ok(())
}
