//! Display formatting for terminal output

pub mod plan;
pub mod report;
pub mod transaction;

pub use plan::{format_break_list, format_plan_summary, format_semester_list};
pub use transaction::{format_preset_list, format_transaction_history, format_transaction_row};
