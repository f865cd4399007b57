//! Transaction CLI commands
//!
//! Implements `dining spend`, `dining add`, `dining delete` and
//! `dining history`.

use clap::Args;

use super::{parse_amount, CliContext};
use crate::display::format_transaction_history;
use crate::display::report::format_money;
use crate::error::DiningResult;
use crate::models::Transaction;
use crate::services::{BudgetService, TransactionService};

#[derive(Args)]
pub struct SpendArgs {
    /// Amount spent (e.g. "8.50")
    pub amount: String,

    /// What it was for, defaults to the configured spend note
    pub note: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Amount added to the balance
    pub amount: String,

    #[arg(short, long)]
    pub note: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID (full, short "txn-..." form, or trailing hex digits)
    pub id: String,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of transactions to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,

    /// Show every transaction
    #[arg(long)]
    pub all: bool,
}

pub(crate) fn print_balance_after(ctx: &CliContext<'_>, txn: &Transaction) -> DiningResult<()> {
    let snapshot = BudgetService::new(ctx.store).snapshot(ctx.today())?;
    let engine = snapshot.engine(ctx.today());

    println!("  ID: {}", txn.id);
    println!(
        "  Remaining balance: {}",
        format_money(engine.remaining_balance(), ctx.currency())
    );
    Ok(())
}

/// Handle `dining spend`
pub fn handle_spend_command(ctx: &CliContext<'_>, args: SpendArgs) -> DiningResult<()> {
    let amount = parse_amount(&args.amount)?;
    let note = args
        .note
        .unwrap_or_else(|| ctx.config.default_spend_note.clone());

    let service = TransactionService::new(ctx.store, ctx.config.overspend_policy);
    let txn = service.spend(amount, &note, ctx.now)?;

    println!(
        "Spent {} on {}",
        format_money(txn.amount, ctx.currency()),
        txn.note
    );
    print_balance_after(ctx, &txn)
}

/// Handle `dining add`
pub fn handle_add_command(ctx: &CliContext<'_>, args: AddArgs) -> DiningResult<()> {
    let amount = parse_amount(&args.amount)?;
    let note = args.note.unwrap_or_default();

    let service = TransactionService::new(ctx.store, ctx.config.overspend_policy);
    let txn = service.add_funds(amount, &note, ctx.now)?;

    println!(
        "Added {} ({})",
        format_money(txn.amount, ctx.currency()),
        txn.note
    );
    print_balance_after(ctx, &txn)
}

/// Handle `dining delete`
pub fn handle_delete_command(ctx: &CliContext<'_>, args: DeleteArgs) -> DiningResult<()> {
    let service = TransactionService::new(ctx.store, ctx.config.overspend_policy);
    let removed = service.delete_transaction(&args.id)?;

    println!(
        "Deleted {} {} ({})",
        removed.kind,
        format_money(removed.amount, ctx.currency()),
        removed.note
    );
    Ok(())
}

/// Handle `dining history`
pub fn handle_history_command(ctx: &CliContext<'_>, args: HistoryArgs) -> DiningResult<()> {
    let service = TransactionService::new(ctx.store, ctx.config.overspend_policy);
    let limit = if args.all { None } else { Some(args.limit) };

    print!("{}", format_transaction_history(&service.list(limit)?));
    Ok(())
}
