use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::args::{AddArgs, AmountArgs, Command, EntryArgs, HistoryArgs, ImportArgs};
use crate::config::Config;
use crate::db::PersistenceGateway;
use crate::export::{export, export_path, ExportOutcome};
use crate::import::{import, import_path};
use crate::models::{format_amount, BudgetAmounts, BudgetRecord, EntryKind};
use crate::repository::RecordRepository;

pub(crate) fn execute(command: &Command, config: &Config) -> Result<()> {
    let gateway = PersistenceGateway::new(&config.db_path);
    match command {
        Command::Init => cli_init(config, &gateway),
        Command::Calc(args) => cli_calc(args),
        Command::Add(args) => cli_add(args, &gateway),
        Command::Import(args) => cli_import(args, &gateway),
        Command::Entry(args) => cli_entry(args, &gateway),
        Command::History(args) => cli_history(args, &gateway),
    }
}

fn cli_init(config: &Config, gateway: &PersistenceGateway) -> Result<()> {
    config.ensure_data_dir()?;
    gateway.initialize()?;
    println!("Database ready at {}", gateway.path().display());
    Ok(())
}

fn cli_calc(args: &AmountArgs) -> Result<()> {
    let amounts = BudgetAmounts::parse_inputs(args.fields())?;
    let preview = BudgetRecord::new(amounts)?;
    println!("Total Expenses: ${}", format_amount(preview.total_expenses()));
    println!("Savings:        ${}", format_amount(preview.savings()));
    println!("{}", preview.status().message());
    Ok(())
}

fn cli_add(args: &AddArgs, gateway: &PersistenceGateway) -> Result<()> {
    let amounts = BudgetAmounts::parse_inputs(args.amounts.fields())?;
    let record = BudgetRecord::new(amounts)?;

    // The session keeps the record whether or not the save succeeds.
    match (args.no_persist, args.user) {
        (true, _) => {}
        (false, None) => println!("No --user given; budget kept for this session only"),
        (false, Some(user)) => match gateway.persist(user, record.amounts()) {
            Ok(()) => println!("Budget record saved for user {user}"),
            Err(e) => eprintln!("Warning: budget not saved: {e}"),
        },
    }

    let mut session = RecordRepository::new();
    session.append(record);

    print_records(&session);
    print_summary(&session);

    if let Some(path) = &args.export {
        cli_export(&session, path)?;
    }
    Ok(())
}

fn cli_import(args: &ImportArgs, gateway: &PersistenceGateway) -> Result<()> {
    let outcome = if args.file.as_os_str() == "-" {
        import(std::io::stdin().lock())
    } else {
        import_path(&args.file)
    }
    .with_context(|| format!("Error importing {}", args.file.display()))?;

    let mut session = RecordRepository::new();
    let imported = outcome.records.len();
    session.extend(outcome.records);
    println!("Imported {imported} records ({} lines skipped)", outcome.skipped);

    print_records(&session);
    print_summary(&session);

    if let Some(path) = &args.export {
        cli_export(&session, path)?;
    }

    if let (true, Some(user)) = (args.persist, args.user) {
        let mut failed = 0;
        for record in session.all() {
            if let Err(e) = gateway.persist(user, record.amounts()) {
                eprintln!("Warning: budget for {} not saved: {e}", record.date());
                failed += 1;
            }
        }
        println!(
            "Saved {} of {} budgets for user {user}",
            session.len() - failed,
            session.len()
        );
    }
    Ok(())
}

fn cli_entry(args: &EntryArgs, gateway: &PersistenceGateway) -> Result<()> {
    let kind = EntryKind::parse(&args.kind)
        .ok_or_else(|| anyhow::anyhow!("Type must be income or expense, got '{}'", args.kind))?;
    let amount = Decimal::from_str(args.amount.trim())
        .with_context(|| format!("Amount must be a number, got '{}'", args.amount))?;
    let id = gateway.add_transaction(args.user, &args.category, amount, kind)?;
    println!(
        "Saved {kind} '{}' of {} for user {} (id {id})",
        args.category,
        dollars(amount),
        args.user
    );
    Ok(())
}

fn cli_history(args: &HistoryArgs, gateway: &PersistenceGateway) -> Result<()> {
    let rows = gateway.transactions_for_user(args.user)?;
    if rows.is_empty() {
        println!("No saved transactions for user {}", args.user);
        return Ok(());
    }

    println!("Saved transactions for user {}", rows[0].user_id);
    println!(
        "{:<6} {:<20} {:<15} {:<8} {:>12}",
        "ID", "Date", "Category", "Type", "Amount"
    );
    println!("{}", "─".repeat(65));
    for row in &rows {
        println!(
            "{:<6} {:<20} {:<15} {:<8} {:>12}",
            row.id,
            row.transaction_date,
            row.category,
            row.kind,
            dollars(row.amount),
        );
    }
    Ok(())
}

/// `-` writes the CSV to stdout.
fn cli_export(session: &RecordRepository, path: &Path) -> Result<()> {
    let outcome = if path.as_os_str() == "-" {
        export(session.all(), std::io::stdout().lock())
    } else {
        export_path(session.all(), path)
    }
    .with_context(|| format!("Error exporting to {}", path.display()))?;
    match outcome {
        ExportOutcome::NothingToExport => println!("No records to export"),
        ExportOutcome::Written { rows, bytes } => {
            println!("Exported {rows} records ({bytes} bytes) to {}", path.display())
        }
    }
    Ok(())
}

fn print_records(session: &RecordRepository) {
    if session.is_empty() {
        return;
    }
    println!();
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12} {:>10}",
        "Date", "Income", "Food", "Rent", "Travel", "Study", "Fun", "Expenses", "Savings"
    );
    println!("{}", "─".repeat(102));
    for record in session.all() {
        let a = record.amounts();
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12} {:>10}",
            record.date(),
            dollars(a.income),
            dollars(a.food),
            dollars(a.rent),
            dollars(a.travel),
            dollars(a.study),
            dollars(a.entertainment),
            dollars(record.total_expenses()),
            dollars(record.savings()),
        );
    }
}

fn print_summary(session: &RecordRepository) {
    println!();
    let (Some(summary), Some(activity)) = (session.summary(), session.recent_activity()) else {
        println!("No budget records yet.");
        return;
    };
    println!("Latest Savings:  {}", dollars(summary.latest_savings));
    println!("Total Expenses:  {}", dollars(summary.latest_total_expenses));
    println!("Income:          {}", dollars(summary.latest_income));
    println!(
        "Last budget added: {} ({} records)",
        activity.last_date, activity.record_count
    );
}

fn dollars(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}
