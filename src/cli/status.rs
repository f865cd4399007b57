//! Pacing report commands
//!
//! Implements `dining status` and `dining stats`.

use chrono::NaiveDate;
use clap::Args;

use super::CliContext;
use crate::config::settings::ViewMode;
use crate::error::DiningResult;
use crate::reports::{DailyReport, StatsReport, WeeklyReport};
use crate::services::navigation::{default_selected_date, step, Direction};
use crate::services::BudgetService;

#[derive(Args)]
pub struct StatusArgs {
    /// Date to report on (YYYY-MM-DD), defaults to today inside the plan
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Show the weekly view
    #[arg(short, long, conflicts_with = "daily")]
    pub weekly: bool,

    /// Show the daily view
    #[arg(long)]
    pub daily: bool,

    /// Step back this many days (weeks in the weekly view)
    #[arg(long, default_value_t = 0)]
    pub back: u32,

    /// Step forward this many days (weeks in the weekly view)
    #[arg(long, default_value_t = 0)]
    pub forward: u32,
}

impl StatusArgs {
    fn view(&self, default: ViewMode) -> ViewMode {
        if self.weekly {
            ViewMode::Weekly
        } else if self.daily {
            ViewMode::Daily
        } else {
            default
        }
    }
}

/// Handle `dining status`
pub fn handle_status_command(ctx: &CliContext<'_>, args: StatusArgs) -> DiningResult<()> {
    let today = ctx.today();
    let snapshot = BudgetService::new(ctx.store).snapshot(today)?;

    if !snapshot.settings.is_configured() {
        println!("No budget plan yet. Run `dining setup --total <amount> --semester <id>` to start.");
        return Ok(());
    }

    let view = args.view(ctx.config.default_view);
    let plan = &snapshot.settings;

    let mut date = args
        .date
        .unwrap_or_else(|| default_selected_date(today, plan));
    for _ in 0..args.back {
        match step(date, Direction::Back, view, plan) {
            Some(prev) => date = prev,
            None => break,
        }
    }
    for _ in 0..args.forward {
        match step(date, Direction::Forward, view, plan) {
            Some(next) => date = next,
            None => break,
        }
    }

    let engine = snapshot.engine(today);
    let output = match view {
        ViewMode::Daily => DailyReport::generate(&engine, date)
            .with_currency(ctx.currency())
            .format_terminal(),
        ViewMode::Weekly => WeeklyReport::generate(&engine, date)
            .with_currency(ctx.currency())
            .format_terminal(),
    };
    print!("{}", output);

    Ok(())
}

/// Handle `dining stats`
pub fn handle_stats_command(ctx: &CliContext<'_>) -> DiningResult<()> {
    let today = ctx.today();
    let snapshot = BudgetService::new(ctx.store).snapshot(today)?;
    let engine = snapshot.engine(today);

    print!(
        "{}",
        StatsReport::generate(&engine)
            .with_currency(ctx.currency())
            .format_terminal()
    );
    Ok(())
}
