use serde_json::Value;
use ynab_client::api::MonthSelector;
use ynab_client::commands::{AccountsParams, PayeesParams, TransactionsParams};
use ynab_client::normalize::TransactionDraft;
use ynab_client::{
    BudgetCommand, ClientError, ClientResult, HttpBudgetApi, Session, Settings, SuccessEnvelope,
    execute,
};

use crate::cli::{Cli, Commands};

/// Settings and the HTTP client shared by every command of one process.
pub struct Context {
    pub api: HttpBudgetApi,
    pub session: Session,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> ClientResult<Self> {
        let settings = Settings::load(cli.config.as_deref())?;
        let session = settings.session(cli.budget.as_deref());
        let api = HttpBudgetApi::new(&settings)?;
        Ok(Self { api, session })
    }

    pub async fn run(&self, command: BudgetCommand) -> ClientResult<SuccessEnvelope> {
        execute(&self.api, &self.session, command).await
    }
}

pub async fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    let command = budget_command(&cli.command)?;
    let context = Context::from_cli(cli)?;
    context.run(command).await
}

pub fn budget_command(command: &Commands) -> ClientResult<BudgetCommand> {
    match command {
        Commands::User { .. } => Ok(BudgetCommand::GetUser),
        Commands::Budgets { .. } => Ok(BudgetCommand::GetBudgets),
        Commands::Accounts { include_closed, .. } => Ok(BudgetCommand::GetAccounts(AccountsParams {
            include_closed: *include_closed,
        })),
        Commands::Transactions {
            account,
            category,
            since,
            limit,
            all,
            ..
        } => Ok(BudgetCommand::GetTransactions(TransactionsParams {
            account_id: account.clone(),
            category_id: category.clone(),
            since_date: *since,
            limit: *limit,
            include_unapproved: *all,
        })),
        Commands::Categories { .. } => Ok(BudgetCommand::GetCategories),
        Commands::Summary { .. } => Ok(BudgetCommand::GetSummary),
        Commands::Month { month, .. } => Ok(BudgetCommand::GetMonth(
            month.unwrap_or(MonthSelector::Current),
        )),
        Commands::Add {
            account,
            amount,
            date,
            payee,
            category,
            memo,
            unapproved,
            ..
        } => Ok(BudgetCommand::AddTransaction(TransactionDraft {
            account_id: account.clone(),
            amount: amount.clone(),
            date: *date,
            payee_name: payee.clone(),
            category_id: category.clone(),
            memo: memo.clone(),
            approved: Some(!*unapproved),
        })),
        Commands::Payees { query, limit, .. } => Ok(BudgetCommand::SearchPayees(PayeesParams {
            query: query.clone().unwrap_or_default(),
            limit: *limit,
        })),
        Commands::Call { name, args, .. } => named_command(name, args.as_deref()),
        Commands::Shell { .. } => Err(ClientError::invalid_argument_with_recovery(
            "`shell` cannot run inside another command.",
            vec!["Run `ynab shell` on its own.".to_string()],
        )),
    }
}

/// Parses the scripting form `<name> [json]` used by `call` and `shell`.
pub fn named_command(name: &str, args: Option<&str>) -> ClientResult<BudgetCommand> {
    let parsed_args = match args.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Some(serde_json::from_str::<Value>(text).map_err(|error| {
            ClientError::invalid_argument_for_command(
                &format!("Arguments for `{name}` are not valid JSON: {error}"),
                Some("call"),
            )
        })?),
        None => None,
    };
    BudgetCommand::from_named(name, parsed_args)
}
