mod accounts_text;
mod categories_text;
mod error_text;
mod format;
mod json;
mod mode;
mod overview_text;
mod payees_text;
mod transactions_text;

use std::io;

use ynab_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    write_stdout_line(&render_success(success, mode)?)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    write_stdout_line(&render_failure(error, mode)?)
}

pub fn render_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<String> {
    match mode {
        OutputMode::Text => render_text_success(success),
        OutputMode::Json => json::render_success_json(success),
    }
}

pub fn render_failure(error: &ClientError, mode: OutputMode) -> io::Result<String> {
    match mode {
        OutputMode::Json => json::render_error_json(error),
        OutputMode::Text => Ok(error_text::render_error(error)),
    }
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "user" => overview_text::render_user(&success.data),
        "budgets" => overview_text::render_budgets(&success.data),
        "summary" => overview_text::render_summary(&success.data),
        "month" => overview_text::render_month(&success.data),
        "accounts" => accounts_text::render_accounts(&success.data),
        "transactions" => transactions_text::render_transactions(&success.data),
        "transaction create" => transactions_text::render_created_transaction(&success.data),
        "categories" => categories_text::render_categories(&success.data),
        "payees" => payees_text::render_payees(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
