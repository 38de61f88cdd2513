use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use ynab_client::api::MonthSelector;
use ynab_client::commands::common;

pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    common::parse_iso_date(value).map_err(|error| error.message)
}

pub fn parse_month_arg(value: &str) -> Result<MonthSelector, String> {
    common::parse_month(value).map_err(|error| error.message)
}

pub const ADD_AFTER_HELP: &str = "\
Amounts:
  Major currency units, negative for money out and positive for money in.
  They are converted to milliunits with half-away-from-zero rounding,
  so -12.3451 is sent as -12345.

Defaults:
  --date defaults to today. Transactions are approved unless --unapproved.

Examples:
  ynab add --account <ACCOUNT_ID> --amount -42.15 --payee \"Corner Shop\"
  ynab add --account <ACCOUNT_ID> --amount 1500 --date 2024-03-01 --memo Salary
";

pub const CALL_AFTER_HELP: &str = "\
Names:
  get_user, get_budgets, get_accounts, get_transactions, get_categories,
  get_summary, get_month, add_transaction, search_payees

Examples:
  ynab call get_summary
  ynab call get_transactions '{\"limit\": 5, \"include_unapproved\": true}'
  ynab call add_transaction '{\"account_id\": \"<ID>\", \"amount\": -3.5}'
";

#[derive(Debug, Parser)]
#[command(name = "ynab")]
#[command(version)]
#[command(about = "Query and update a YNAB budget from the terminal")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Budget id to use instead of the configured one (`last-used` by default)
    #[arg(long, global = true, value_name = "BUDGET_ID")]
    pub budget: Option<String>,
    /// Config file to read instead of ~/.config/ynab/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the user the token belongs to
    User {
        #[arg(long)]
        json: bool,
    },
    /// List budgets
    Budgets {
        #[arg(long)]
        json: bool,
    },
    /// List accounts with the on-budget balance
    Accounts {
        /// Also list closed accounts
        #[arg(long)]
        include_closed: bool,
        #[arg(long)]
        json: bool,
    },
    /// List recent transactions, newest first
    Transactions {
        #[arg(long, value_name = "ACCOUNT_ID")]
        account: Option<String>,
        #[arg(long, value_name = "CATEGORY_ID")]
        category: Option<String>,
        /// Only transactions on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        since: Option<NaiveDate>,
        #[arg(long)]
        limit: Option<usize>,
        /// Include unapproved transactions
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// List visible categories by group
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Budget overview for the current month
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Show one budget month
    Month {
        /// current, YYYY-MM or YYYY-MM-DD
        #[arg(value_parser = parse_month_arg)]
        month: Option<MonthSelector>,
        #[arg(long)]
        json: bool,
    },
    /// Create a transaction
    #[command(after_help = ADD_AFTER_HELP)]
    Add {
        #[arg(long, value_name = "ACCOUNT_ID")]
        account: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(long)]
        payee: Option<String>,
        #[arg(long, value_name = "CATEGORY_ID")]
        category: Option<String>,
        #[arg(long)]
        memo: Option<String>,
        #[arg(long)]
        unapproved: bool,
        #[arg(long)]
        json: bool,
    },
    /// Search payees by name
    Payees {
        query: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Run a command by name with JSON arguments
    #[command(after_help = CALL_AFTER_HELP)]
    Call {
        name: String,
        #[arg(value_name = "ARGS_JSON")]
        args: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Read `<name> [json-args]` lines from stdin until `exit`
    Shell {
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
