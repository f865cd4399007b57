//! Budget plan display formatting

use super::report::{format_days, format_money};
use crate::models::{Break, Semester};
use crate::pacing::PacingEngine;

/// Summary of the plan and its fixed daily budget
pub fn format_plan_summary(engine: &PacingEngine<'_>, symbol: &str) -> String {
    let plan = engine.settings();
    let mut output = String::new();

    output.push_str(&format!("{:<18} {}\n", "Total", format_money(plan.total, symbol)));

    let end = plan
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    output.push_str(&format!("{:<18} {} to {}\n", "Dates", plan.start_date, end));

    if !plan.semester.is_empty() {
        output.push_str(&format!("{:<18} {}\n", "Semester", plan.semester));
    }
    output.push_str(&format!("{:<18} {}\n", "Meals per week", plan.meals_per_week));
    output.push_str(&format!("{:<18} {}\n", "Breaks", plan.breaks.len()));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Eating days",
        format_days(engine.total_eating_days())
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Daily budget",
        format_money(engine.original_daily_budget(), symbol)
    ));

    output
}

/// Numbered break list, 1-based to match `dining break remove`
pub fn format_break_list(breaks: &[Break]) -> String {
    if breaks.is_empty() {
        return "No breaks.\n".to_string();
    }

    breaks
        .iter()
        .enumerate()
        .map(|(i, brk)| format!("{:>3}. {}\n", i + 1, brk))
        .collect()
}

pub fn format_semester_list(semesters: &[Semester]) -> String {
    let mut output = String::new();
    for sem in semesters {
        output.push_str(&format!(
            "{:<12} {:<13} {} to {}  ({} breaks)\n",
            sem.id,
            sem.name,
            sem.start_date,
            sem.end_date,
            sem.breaks.len()
        ));
    }
    output
}
