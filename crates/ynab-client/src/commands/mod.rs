pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod common;
pub mod month;
pub mod payees;
pub mod summary;
pub mod transactions;
pub mod user;

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{BudgetApi, MonthSelector};
use crate::contracts::envelope::SuccessEnvelope;
use crate::normalize::TransactionDraft;
use crate::settings::Session;
use crate::{ClientError, ClientResult};

/// Names accepted by [`BudgetCommand::from_named`], in help order.
pub const COMMAND_NAMES: [&str; 9] = [
    "get_user",
    "get_budgets",
    "get_accounts",
    "get_transactions",
    "get_categories",
    "get_summary",
    "get_month",
    "add_transaction",
    "search_payees",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsParams {
    pub include_closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransactionsParams {
    pub account_id: Option<String>,
    pub category_id: Option<String>,
    pub since_date: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub include_unapproved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayeesParams {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MonthArgs {
    month: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

/// One variant per supported operation, each with its own parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetCommand {
    GetUser,
    GetBudgets,
    GetAccounts(AccountsParams),
    GetTransactions(TransactionsParams),
    GetCategories,
    GetSummary,
    GetMonth(MonthSelector),
    AddTransaction(TransactionDraft),
    SearchPayees(PayeesParams),
}

impl BudgetCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetUser => "get_user",
            Self::GetBudgets => "get_budgets",
            Self::GetAccounts(_) => "get_accounts",
            Self::GetTransactions(_) => "get_transactions",
            Self::GetCategories => "get_categories",
            Self::GetSummary => "get_summary",
            Self::GetMonth(_) => "get_month",
            Self::AddTransaction(_) => "add_transaction",
            Self::SearchPayees(_) => "search_payees",
        }
    }

    /// Builds a command from its scripting name and an optional JSON object of
    /// arguments, e.g. `("get_transactions", {"limit": 5})`.
    pub fn from_named(name: &str, args: Option<Value>) -> ClientResult<Self> {
        let parsed = match name {
            "get_user" => parse_args::<NoArgs>(name, args).map(|_| Self::GetUser),
            "get_budgets" => parse_args::<NoArgs>(name, args).map(|_| Self::GetBudgets),
            "get_accounts" => parse_args(name, args).map(Self::GetAccounts),
            "get_transactions" => parse_args(name, args).map(Self::GetTransactions),
            "get_categories" => parse_args::<NoArgs>(name, args).map(|_| Self::GetCategories),
            "get_summary" => parse_args::<NoArgs>(name, args).map(|_| Self::GetSummary),
            "get_month" => {
                parse_args::<MonthArgs>(name, args).and_then(|parsed| match parsed.month {
                    Some(text) => common::parse_month(&text).map(Self::GetMonth),
                    None => Ok(Self::GetMonth(MonthSelector::Current)),
                })
            }
            "add_transaction" => parse_args(name, args).map(Self::AddTransaction),
            "search_payees" => parse_args(name, args).map(Self::SearchPayees),
            _ => return Err(ClientError::unknown_command(name, &COMMAND_NAMES)),
        };
        parsed.map_err(|error| error.in_operation(name))
    }
}

fn parse_args<T>(name: &str, args: Option<Value>) -> ClientResult<T>
where
    T: DeserializeOwned + Default,
{
    match args {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Invalid arguments for `{name}`: {error}"),
                vec!["Pass arguments as one JSON object, e.g. '{\"limit\": 5}'.".to_string()],
            )
        }),
        Some(_) => Err(ClientError::invalid_argument_with_recovery(
            &format!("Arguments for `{name}` must be a JSON object."),
            vec!["Pass arguments as one JSON object, e.g. '{\"limit\": 5}'.".to_string()],
        )),
    }
}

/// Runs one command against `api` in the given session.
pub async fn execute(
    api: &dyn BudgetApi,
    session: &Session,
    command: BudgetCommand,
) -> ClientResult<SuccessEnvelope> {
    tracing::debug!(
        command = command.name(),
        budget_id = %session.budget_id,
        "executing command"
    );
    let operation = command.name();
    let result = match command {
        BudgetCommand::GetUser => user::run(api).await,
        BudgetCommand::GetBudgets => budgets::run(api).await,
        BudgetCommand::GetAccounts(params) => accounts::run(api, session, &params).await,
        BudgetCommand::GetTransactions(params) => {
            transactions::list(api, session, &params).await
        }
        BudgetCommand::GetCategories => categories::run(api, session).await,
        BudgetCommand::GetSummary => summary::run(api, session).await,
        BudgetCommand::GetMonth(selector) => month::run(api, session, selector).await,
        BudgetCommand::AddTransaction(draft) => {
            let today = Local::now().date_naive();
            transactions::create(api, session, draft, today).await
        }
        BudgetCommand::SearchPayees(params) => payees::run(api, session, &params).await,
    };
    result.map_err(|error| error.in_operation(operation))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::{BudgetCommand, COMMAND_NAMES, TransactionsParams};
    use crate::api::MonthSelector;

    #[test]
    fn every_listed_name_parses_without_arguments() {
        for name in COMMAND_NAMES {
            let parsed = BudgetCommand::from_named(name, None);
            assert!(parsed.is_ok(), "failed to parse {name}");
            if let Ok(command) = parsed {
                assert_eq!(command.name(), name);
            }
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let parsed = BudgetCommand::from_named("delete_budget", None);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.code, "unknown_command");
            assert_eq!(error.operation, None);
        }
    }

    #[test]
    fn transaction_arguments_are_typed() {
        let parsed = BudgetCommand::from_named(
            "get_transactions",
            Some(json!({"account_id": "a1", "since_date": "2024-01-01", "limit": 3})),
        );
        assert!(parsed.is_ok());
        if let Ok(command) = parsed {
            assert_eq!(
                command,
                BudgetCommand::GetTransactions(TransactionsParams {
                    account_id: Some("a1".to_string()),
                    category_id: None,
                    since_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                    limit: Some(3),
                    include_unapproved: false,
                })
            );
        }
    }

    #[test]
    fn unknown_or_mistyped_arguments_are_rejected() {
        let unknown = BudgetCommand::from_named("get_accounts", Some(json!({"closed": true})));
        assert!(unknown.is_err());
        if let Err(error) = unknown {
            assert_eq!(error.code, "invalid_argument");
            assert_eq!(error.operation.as_deref(), Some("get_accounts"));
        }

        let mistyped = BudgetCommand::from_named("get_transactions", Some(json!({"limit": "ten"})));
        assert!(mistyped.is_err());

        let not_object = BudgetCommand::from_named("get_summary", Some(json!([1, 2])));
        assert!(not_object.is_err());

        let args_on_no_arg_command = BudgetCommand::from_named("get_budgets", Some(json!({"x": 1})));
        assert!(args_on_no_arg_command.is_err());
    }

    #[test]
    fn month_argument_is_parsed() {
        let parsed = BudgetCommand::from_named("get_month", Some(json!({"month": "2024-02"})));
        assert!(parsed.is_ok());
        if let Ok(command) = parsed {
            assert_eq!(
                command,
                BudgetCommand::GetMonth(MonthSelector::Month(
                    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default()
                ))
            );
        }

        let bad = BudgetCommand::from_named("get_month", Some(json!({"month": "Feb"})));
        assert!(bad.is_err());
        if let Err(error) = bad {
            assert_eq!(error.code, "validation_error");
            assert_eq!(error.operation.as_deref(), Some("get_month"));
        }
    }

    #[test]
    fn add_transaction_keeps_draft_unvalidated() {
        let parsed = BudgetCommand::from_named("add_transaction", Some(json!({"amount": 5})));
        assert!(parsed.is_ok());
        if let Ok(BudgetCommand::AddTransaction(draft)) = parsed {
            assert_eq!(draft.account_id, None);
            assert_eq!(draft.amount.as_deref(), Some("5"));
        }
    }
}
