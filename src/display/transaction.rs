//! Transaction display formatting

use super::report::truncate;
use crate::models::{MealPreset, Transaction, TransactionKind};

/// Format a single transaction as a history row
pub fn format_transaction_row(txn: &Transaction) -> String {
    let signed = match txn.kind {
        TransactionKind::Spend => format!("-{}", txn.amount),
        TransactionKind::Add => format!("+{}", txn.amount),
    };

    format!(
        "{:12} {} {:24} {:>10}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d %H:%M"),
        truncate(&txn.note, 24),
        signed
    )
}

/// Format transactions as a history list
pub fn format_transaction_history(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:24} {:>10}\n",
        "ID", "Date", "Note", "Amount"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

pub fn format_preset_list(presets: &[MealPreset]) -> String {
    if presets.is_empty() {
        return "No presets saved.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:12} {:24} {:>10}\n", "ID", "Name", "Amount"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for preset in presets {
        output.push_str(&format!(
            "{:12} {:24} {:>10}\n",
            preset.id.short(),
            truncate(&preset.name, 24),
            preset.amount.to_string()
        ));
    }

    output
}
