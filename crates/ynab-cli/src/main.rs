mod cli;
mod dispatch;
mod logging;
mod output;
mod repl;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use ynab_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "ynab - your YNAB budget from the terminal

Usage:
  ynab <command>

Start here:
  export YNAB_API_TOKEN=<personal access token>
  ynab summary
  ynab --help
";

const TOP_LEVEL_HELP: &str = "ynab - your YNAB budget from the terminal

USAGE: ynab [--budget <ID>] [--config <PATH>] <command> [--json]

Look around:
  ynab user                                   Show who the token belongs to
  ynab budgets                                List budgets and their ids
  ynab summary                                Balance and current month at a glance
  ynab accounts [--include-closed]            Accounts and the on-budget balance
  ynab categories                             Visible categories by group
  ynab month [current|YYYY-MM]                One budget month

Transactions:
  ynab transactions [--account <ID>] [--category <ID>] [--since <DATE>] [--limit <N>] [--all]
  ynab add --account <ID> --amount <AMOUNT> [--payee <NAME>] [--date <DATE>]
  ynab payees [QUERY]                         Find payee names

Scripting:
  ynab call <name> ['<json-args>']            Run a command by name, e.g. `ynab call get_summary`
  ynab shell                                  Read one `<name> [json-args]` per line from stdin

Every command accepts --json for machine-readable output.

Configuration:
  YNAB_API_TOKEN, YNAB_BUDGET_ID, YNAB_API_URL, YNAB_TIMEOUT_SECS, YNAB_DEFAULT_LIMIT,
  or the same keys in lowercase in ~/.config/ynab/config.toml (override with --config
  or YNAB_CONFIG). Set YNAB_LOG=debug to trace API calls on stderr.
";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(code) => code,
    }
}

async fn run() -> Result<ExitCode, ExitCode> {
    logging::init();

    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }
    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return Err(handle_parse_error(&err, &raw_args)),
    };
    let mode = output::mode_for_command(&cli.command);

    if matches!(cli.command, cli::Commands::Shell { .. }) {
        return repl::run(&cli, mode).await;
    }

    match dispatch::dispatch(&cli).await {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Help and version requests exit 0; everything else is an `invalid_argument`
/// failure rendered like any other error.
fn handle_parse_error(err: &clap::Error, raw_args: &[String]) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let text = if is_top_level_help_request(raw_args) {
                TOP_LEVEL_HELP.to_string()
            } else {
                err.to_string()
            };
            if write_stdout_text(&text).is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        ErrorKind::DisplayVersion => {
            if write_stdout_text(&err.to_string()).is_err() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        kind => {
            let command_hint = if matches!(
                kind,
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
            ) {
                command_path_from_args(raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return ExitCode::from(2);
            }
            ExitCode::from(1)
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing usage and "For more information" lines.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// First known subcommand name in the raw args, for `--help` hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    const SUBCOMMANDS: [&str; 11] = [
        "user",
        "budgets",
        "accounts",
        "transactions",
        "categories",
        "summary",
        "month",
        "add",
        "payees",
        "call",
        "shell",
    ];
    raw_args
        .iter()
        .skip(1)
        .find(|value| SUBCOMMANDS.contains(&value.as_str()))
        .cloned()
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}
