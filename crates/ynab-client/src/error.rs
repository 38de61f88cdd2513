use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const TOKEN_ENV_VAR: &str = "YNAB_API_TOKEN";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
    /// Scripting name of the operation that failed, when one was running.
    pub operation: Option<String>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
            operation: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Tags the error with `operation` unless an inner call already did.
    pub fn in_operation(mut self, operation: &str) -> Self {
        if self.operation.is_none() {
            self.operation = Some(operation.to_string());
        }
        self
    }

    /// HTTP status of a remote error.
    pub fn http_status(&self) -> Option<u64> {
        if self.code != "remote_error" {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|data| data.get("status"))
            .and_then(Value::as_u64)
    }

    pub fn missing_token() -> Self {
        Self::new(
            "configuration_error",
            "No YNAB personal access token is configured.",
            vec![
                "Create a token under Account Settings > Developer Settings in YNAB.".to_string(),
                format!("Export it: `export {TOKEN_ENV_VAR}=<token>`."),
                "Or set `api_token` in ~/.config/ynab/config.toml.".to_string(),
            ],
        )
    }

    pub fn configuration(message: &str) -> Self {
        Self::new(
            "configuration_error",
            message,
            vec![
                "Check the config file passed with --config or set in YNAB_CONFIG.".to_string(),
                "Check YNAB_* environment variables for typos or malformed values.".to_string(),
            ],
        )
    }

    pub fn validation(message: &str) -> Self {
        Self::new(
            "validation_error",
            message,
            vec!["Fix the input value and rerun the command.".to_string()],
        )
    }

    pub fn missing_account_id() -> Self {
        Self::validation("missing account id").with_data(json!({ "field": "account_id" }))
    }

    pub fn invalid_amount() -> Self {
        Self::validation("invalid amount").with_data(json!({ "field": "amount" }))
    }

    pub fn remote(status: u16, id: Option<&str>, name: &str, detail: &str) -> Self {
        Self::new(
            "remote_error",
            &format!("{name}: {detail}"),
            remote_recovery_steps(status),
        )
        .with_data(json!({
            "status": status,
            "id": id,
            "name": name,
            "detail": detail,
        }))
    }

    pub fn transport(detail: &str) -> Self {
        Self::new(
            "transport_error",
            &format!("Could not reach the YNAB API: {detail}"),
            vec![
                "Check your network connection.".to_string(),
                "Check YNAB_API_URL if you override the API base URL.".to_string(),
            ],
        )
    }

    pub fn unknown_command(name: &str, known: &[&str]) -> Self {
        Self::new(
            "unknown_command",
            &format!("Unknown command `{name}`."),
            vec![format!("Use one of: {}.", known.join(", "))],
        )
        .with_data(json!({
            "command": name,
            "known_commands": known,
        }))
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `ynab {cmd} --help` for usage."),
            None => "Run `ynab --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
    }
}

fn remote_recovery_steps(status: u16) -> Vec<String> {
    match status {
        401 => vec![format!(
            "Check that {TOKEN_ENV_VAR} holds a valid, unrevoked personal access token."
        )],
        403 => vec!["Your YNAB subscription or token may not allow this request.".to_string()],
        404 => vec![
            "Run `ynab budgets` to list valid budget ids.".to_string(),
            "Pass one with --budget or set YNAB_BUDGET_ID.".to_string(),
        ],
        429 => vec!["The API rate limit was reached; wait a few minutes and retry.".to_string()],
        _ => vec!["Retry the command.".to_string()],
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
