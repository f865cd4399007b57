//! Report formatting utilities for terminal output

use crate::models::Money;
use crate::pacing::PaceStatus;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format an amount with an explicit sign, e.g. `+$3.10` or `-$0.75`
pub fn format_signed(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

/// Format a meal-equivalent count, dropping the fraction when it is whole
pub fn format_days(days: f64) -> String {
    if (days - days.round()).abs() < 1e-9 {
        format!("{:.0}", days)
    } else {
        format!("{:.1}", days)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Bracketed status badge, e.g. `[Ahead]`
pub fn format_status(status: PaceStatus) -> String {
    format!("[{}]", status)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
