use crate::ClientResult;
use crate::api::BudgetApi;
use crate::commands::AccountsParams;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{AccountRow, AccountsData, MoneyView};
use crate::normalize::{aggregate_on_budget_balance, open_accounts};
use crate::settings::Session;

pub async fn run(
    api: &dyn BudgetApi,
    session: &Session,
    params: &AccountsParams,
) -> ClientResult<SuccessEnvelope> {
    let accounts = open_accounts(api.accounts(&session.budget_id).await?, params.include_closed);
    let on_budget_balance = aggregate_on_budget_balance(&accounts);

    let data = AccountsData {
        budget_id: session.budget_id.clone(),
        include_closed: params.include_closed,
        on_budget_balance: MoneyView::new(on_budget_balance, &session.currency),
        rows: accounts
            .iter()
            .map(|account| AccountRow::from_record(account, &session.currency))
            .collect(),
    };

    success("accounts", data)
}
