use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use dining_budget::cli::{
    handle_add_command, handle_break_command, handle_config_command, handle_delete_command,
    handle_history_command, handle_preset_command, handle_reset_command, handle_semester_command,
    handle_setup_command, handle_spend_command, handle_stats_command, handle_status_command,
    AddArgs, BreakCommands, CliContext, ConfigArgs, DeleteArgs, HistoryArgs, PresetCommands,
    ResetArgs, SemesterCommands, SetupArgs, SpendArgs, StatusArgs,
};
use dining_budget::config::{paths::DiningPaths, settings::Settings};
use dining_budget::logging::init_tracing;
use dining_budget::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "dining",
    version,
    about = "Pace a semester of dining dollars",
    long_about = "Tracks a fixed dining-dollar budget across a semester. It spreads the \
                  total over the days you actually eat on campus, then tells you each day \
                  or week whether you are ahead of or behind that pace."
)]
struct Cli {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, env = "DINING_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the budget plan
    Setup(SetupArgs),

    /// Built-in semester templates
    #[command(subcommand)]
    Semester(SemesterCommands),

    /// Manage breaks (days with no campus meals)
    #[command(subcommand)]
    Break(BreakCommands),

    /// Log a purchase
    Spend(SpendArgs),

    /// Add funds to the balance
    Add(AddArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show recent transactions
    #[command(alias = "log")]
    History(HistoryArgs),

    /// Saved one-tap purchases
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Daily or weekly pacing report
    Status(StatusArgs),

    /// Spending statistics
    Stats,

    /// Show paths and update preferences
    Config(ConfigArgs),

    /// Delete the plan and all records
    Reset(ResetArgs),
}

fn current_time(pinned: Option<NaiveDate>) -> NaiveDateTime {
    let now = Local::now().naive_local();
    match pinned {
        Some(date) => date.and_time(now.time()),
        None => now,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = DiningPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = JsonStore::new(paths.clone())?;
    let ctx = CliContext::new(&store, &settings, current_time(cli.today));

    match cli.command {
        Some(Commands::Setup(args)) => handle_setup_command(&ctx, args)?,
        Some(Commands::Semester(cmd)) => handle_semester_command(&ctx, cmd)?,
        Some(Commands::Break(cmd)) => handle_break_command(&ctx, cmd)?,
        Some(Commands::Spend(args)) => handle_spend_command(&ctx, args)?,
        Some(Commands::Add(args)) => handle_add_command(&ctx, args)?,
        Some(Commands::Delete(args)) => handle_delete_command(&ctx, args)?,
        Some(Commands::History(args)) => handle_history_command(&ctx, args)?,
        Some(Commands::Preset(cmd)) => handle_preset_command(&ctx, cmd)?,
        Some(Commands::Status(args)) => handle_status_command(&ctx, args)?,
        Some(Commands::Stats) => handle_stats_command(&ctx)?,
        Some(Commands::Config(args)) => handle_config_command(&paths, settings.clone(), args)?,
        Some(Commands::Reset(args)) => handle_reset_command(&ctx, args)?,
        None => handle_status_command(
            &ctx,
            StatusArgs {
                date: None,
                weekly: false,
                daily: false,
                back: 0,
                forward: 0,
            },
        )?,
    }

    Ok(())
}
