use std::io::IsTerminal;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use ynab_client::commands::COMMAND_NAMES;
use ynab_client::{BudgetCommand, ClientResult};

use crate::cli::Cli;
use crate::dispatch::{Context, named_command};
use crate::output::{self, OutputMode};
use crate::stdout_io::{write_stdout_line, write_stdout_text};

const PROMPT: &str = "ynab> ";

#[derive(Debug, PartialEq, Eq)]
enum ShellLine {
    Blank,
    Help,
    Exit,
    Run(BudgetCommand),
}

/// Reads `<name> [json-args]` lines from stdin and runs each against one
/// session. A failing line is reported and the loop goes on.
pub async fn run(cli: &Cli, mode: OutputMode) -> Result<ExitCode, ExitCode> {
    let context = match Context::from_cli(cli) {
        Ok(context) => context,
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };

    let prompt = std::io::stdin().is_terminal() && mode == OutputMode::Text;
    if prompt && write_stdout_line(&shell_help()).is_err() {
        return Err(ExitCode::from(2));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if prompt && write_stdout_text(PROMPT).is_err() {
            return Err(ExitCode::from(2));
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                tracing::warn!(%error, "stopped reading shell input");
                break;
            }
        };

        let printed = match parse_line(&line) {
            Ok(ShellLine::Blank) => Ok(()),
            Ok(ShellLine::Help) => write_stdout_line(&shell_help()),
            Ok(ShellLine::Exit) => break,
            Ok(ShellLine::Run(command)) => match context.run(command).await {
                Ok(success) => output::print_success(&success, mode),
                Err(error) => output::print_failure(&error, mode),
            },
            Err(error) => output::print_failure(&error, mode),
        };
        if printed.is_err() {
            return Err(ExitCode::from(2));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_line(line: &str) -> ClientResult<ShellLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ShellLine::Blank);
    }

    let (name, args) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest)),
        None => (trimmed, None),
    };
    match name {
        "help" => Ok(ShellLine::Help),
        "exit" | "quit" => Ok(ShellLine::Exit),
        _ => named_command(name, args).map(ShellLine::Run),
    }
}

fn shell_help() -> String {
    let mut lines = vec![
        "One command per line: <name> [json-args]".to_string(),
        String::new(),
        "Commands:".to_string(),
    ];
    lines.extend(COMMAND_NAMES.iter().map(|name| format!("  {name}")));
    lines.push(String::new());
    lines.push("Example: get_transactions {\"limit\": 5}".to_string());
    lines.push("Type `help` to see this again, `exit` or `quit` to leave.".to_string());
    lines.join("\n")
}
