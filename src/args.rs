//! Command-line interface for the budget planner.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// budget-planner: record income and expenses, see what you save.
///
/// Budgets entered or imported in one run form the session. They can be
/// exported to CSV and saved to the local database per user.
#[derive(Debug, Parser)]
#[command(name = "budget-planner", version)]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) common: Common,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Arguments common to all subcommands.
#[derive(Debug, clap::Args)]
pub(crate) struct Common {
    /// Path to the SQLite database. Defaults to the platform data directory.
    #[arg(long, global = true, env = "BUDGET_PLANNER_DB")]
    pub(crate) db: Option<PathBuf>,

    /// Logging verbosity: off, error, warn, info, debug, trace.
    /// RUST_LOG overrides this.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    pub(crate) log_level: LevelFilter,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Create the database and its table.
    Init,
    /// Work out total expenses and savings without storing anything.
    Calc(AmountArgs),
    /// Record a budget dated today and save it for a user.
    Add(AddArgs),
    /// Load budgets from a text file (date,income,food,rent,travel,study,entertainment).
    Import(ImportArgs),
    /// Save a single income or expense entry.
    Entry(EntryArgs),
    /// List a user's saved transactions.
    History(HistoryArgs),
}

/// Amounts as typed. Blank means zero.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AmountArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) income: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) food: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) rent: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) travel: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) study: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) entertainment: String,
}

impl AmountArgs {
    pub(crate) fn fields(&self) -> [&str; 6] {
        [
            self.income.as_str(),
            self.food.as_str(),
            self.rent.as_str(),
            self.travel.as_str(),
            self.study.as_str(),
            self.entertainment.as_str(),
        ]
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct AddArgs {
    #[command(flatten)]
    pub(crate) amounts: AmountArgs,

    /// User the budget is saved for.
    #[arg(long, env = "BUDGET_PLANNER_USER")]
    pub(crate) user: Option<i64>,

    /// Keep the budget in this session only.
    #[arg(long)]
    pub(crate) no_persist: bool,

    /// Write the session's records to this CSV file.
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ImportArgs {
    /// File to import, or - for stdin.
    pub(crate) file: PathBuf,

    /// Write the imported records to this CSV file, or - for stdout.
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,

    /// Save every imported budget to the database.
    #[arg(long, requires = "user")]
    pub(crate) persist: bool,

    /// User the budgets are saved for.
    #[arg(long, env = "BUDGET_PLANNER_USER")]
    pub(crate) user: Option<i64>,
}

#[derive(Debug, clap::Args)]
pub(crate) struct EntryArgs {
    #[arg(long, env = "BUDGET_PLANNER_USER")]
    pub(crate) user: i64,

    #[arg(long)]
    pub(crate) category: String,

    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amount: String,

    /// income or expense
    #[arg(long = "type", default_value = "expense")]
    pub(crate) kind: String,
}

#[derive(Debug, clap::Args)]
pub(crate) struct HistoryArgs {
    #[arg(long, env = "BUDGET_PLANNER_USER")]
    pub(crate) user: i64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_calc_with_negative_amount() {
        let args = Args::try_parse_from([
            "budget-planner",
            "calc",
            "--income",
            "1000",
            "--food",
            "-20",
        ])
        .unwrap();
        match args.command {
            Command::Calc(amounts) => {
                assert_eq!(amounts.fields(), ["1000", "-20", "", "", "", ""]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_import_persist_requires_user() {
        let result = Args::try_parse_from(["budget-planner", "import", "q1.txt", "--persist"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_db_flag() {
        let args =
            Args::try_parse_from(["budget-planner", "history", "--user", "3", "--db", "x.db"])
                .unwrap();
        assert_eq!(args.common.db, Some(PathBuf::from("x.db")));
        assert!(matches!(args.command, Command::History(HistoryArgs { user: 3 })));
    }

    #[test]
    fn test_parse_entry_type_flag() {
        let args = Args::try_parse_from([
            "budget-planner",
            "entry",
            "--user",
            "2",
            "--category",
            "Gift",
            "--amount",
            "50",
            "--type",
            "income",
        ])
        .unwrap();
        match args.command {
            Command::Entry(entry) => {
                assert_eq!(entry.user, 2);
                assert_eq!(entry.category, "Gift");
                assert_eq!(entry.kind, "income");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
