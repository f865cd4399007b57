//! Plan CLI commands
//!
//! Implements `dining setup`, `dining semester`, `dining break` and
//! `dining reset`.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::{parse_amount, CliContext};
use crate::display::{format_break_list, format_plan_summary, format_semester_list};
use crate::error::{DiningError, DiningResult};
use crate::models::semester::builtin_catalog;
use crate::models::{Break, MealsPerWeek, SettingsPatch};
use crate::services::BudgetService;

#[derive(Args)]
pub struct SetupArgs {
    /// Total dining dollars for the plan (e.g. "700" or "$700.00")
    #[arg(short, long)]
    pub total: Option<String>,

    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Meals per week: 5, 7, 10, 14 or 21
    #[arg(short, long)]
    pub meals: Option<u32>,

    /// Take dates and breaks from a built-in semester first
    #[arg(short, long)]
    pub semester: Option<String>,
}

/// Semester subcommands
#[derive(Subcommand)]
pub enum SemesterCommands {
    /// List the built-in semesters
    List,

    /// Replace the plan dates and breaks with a semester's
    Apply {
        /// Semester id (e.g. "spring2025")
        id: String,
    },
}

/// Break subcommands
#[derive(Subcommand)]
pub enum BreakCommands {
    /// Add a break (days with no meals)
    Add {
        /// First day of the break (YYYY-MM-DD)
        start: NaiveDate,
        /// Last day of the break, defaults to the first
        end: Option<NaiveDate>,
        /// Label, e.g. "Spring Break"
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List breaks
    List,

    /// Remove a break by its number in `dining break list`
    Remove {
        number: usize,
    },
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm deleting the plan, all transactions and all presets
    #[arg(long)]
    pub yes: bool,
}

/// Handle `dining setup`
pub fn handle_setup_command(ctx: &CliContext<'_>, args: SetupArgs) -> DiningResult<()> {
    let service = BudgetService::new(ctx.store);
    let today = ctx.today();

    if let Some(id) = &args.semester {
        let settings = service.apply_semester(id, today)?;
        println!(
            "Applied semester {} ({} to {})",
            id,
            settings.start_date,
            settings
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_default()
        );
    }

    let mut patch = SettingsPatch::new();
    if let Some(total) = &args.total {
        patch = patch.total(parse_amount(total)?);
    }
    if let Some(start) = args.start {
        patch = patch.start_date(start);
    }
    if let Some(end) = args.end {
        patch = patch.end_date(end);
    }
    if let Some(meals) = args.meals {
        let meals = MealsPerWeek::new(meals).map_err(|e| DiningError::Validation(e.to_string()))?;
        patch = patch.meals_per_week(meals);
    }

    if !patch.is_empty() {
        service.save_settings(patch, today)?;
    }

    let snapshot = service.snapshot(today)?;
    let engine = snapshot.engine(today);
    print!("{}", format_plan_summary(&engine, ctx.currency()));

    if !snapshot.settings.is_configured() {
        println!();
        println!("Set a total and an end date to start pacing:");
        println!("  dining setup --total 700 --semester spring2025");
    }

    Ok(())
}

/// Handle `dining semester`
pub fn handle_semester_command(ctx: &CliContext<'_>, cmd: SemesterCommands) -> DiningResult<()> {
    match cmd {
        SemesterCommands::List => {
            print!("{}", format_semester_list(&builtin_catalog()));
        }

        SemesterCommands::Apply { id } => {
            let service = BudgetService::new(ctx.store);
            let settings = service.apply_semester(&id, ctx.today())?;
            println!("Applied semester {}", settings.semester);
            print!("{}", format_break_list(&settings.breaks));
        }
    }

    Ok(())
}

/// Handle `dining break`
pub fn handle_break_command(ctx: &CliContext<'_>, cmd: BreakCommands) -> DiningResult<()> {
    let service = BudgetService::new(ctx.store);
    let today = ctx.today();

    match cmd {
        BreakCommands::Add { start, end, name } => {
            let end = end.unwrap_or(start);
            let brk = match name {
                Some(name) => Break::named(start, end, name),
                None => Break::new(start, end),
            };
            let settings = service.add_break(brk.clone(), today)?;
            println!("Added break: {}", brk);
            println!("Breaks: {}", settings.breaks.len());
        }

        BreakCommands::List => {
            let settings = service.settings(today)?;
            print!("{}", format_break_list(&settings.breaks));
        }

        BreakCommands::Remove { number } => {
            if number == 0 {
                return Err(DiningError::Validation(
                    "Break numbers start at 1".to_string(),
                ));
            }
            let removed = service.remove_break(number - 1, today)?;
            println!("Removed break: {}", removed);
        }
    }

    Ok(())
}

/// Handle `dining reset`
pub fn handle_reset_command(ctx: &CliContext<'_>, args: ResetArgs) -> DiningResult<()> {
    if !args.yes {
        return Err(DiningError::Validation(
            "This deletes the plan, all transactions and all presets. Re-run with --yes to confirm"
                .to_string(),
        ));
    }

    BudgetService::new(ctx.store).reset()?;
    println!("All budget data deleted.");
    Ok(())
}
