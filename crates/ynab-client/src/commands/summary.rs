use crate::ClientResult;
use crate::api::{BudgetApi, MonthSelector};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BudgetRef, MoneyView, SummaryData};
use crate::normalize::aggregate_on_budget_balance;
use crate::settings::Session;

/// Budget, accounts and the current month are fetched concurrently; the first
/// failure aborts the whole summary.
pub async fn run(api: &dyn BudgetApi, session: &Session) -> ClientResult<SuccessEnvelope> {
    let budget_id = session.budget_id.as_str();
    let (budget, accounts, month) = tokio::try_join!(
        api.budget(budget_id),
        api.accounts(budget_id),
        api.month(budget_id, MonthSelector::Current),
    )?;

    let currency = budget
        .currency_format
        .clone()
        .unwrap_or_else(|| session.currency.clone());
    let on_budget_account_count = accounts
        .iter()
        .filter(|account| account.on_budget && !account.closed && !account.deleted)
        .count();

    let data = SummaryData {
        budget: BudgetRef {
            id: budget.id,
            name: budget.name,
        },
        currency: currency.iso_code.clone(),
        month: month.month,
        on_budget_balance: MoneyView::new(aggregate_on_budget_balance(&accounts), &currency),
        on_budget_account_count,
        income: MoneyView::new(month.income, &currency),
        budgeted: MoneyView::new(month.budgeted, &currency),
        activity: MoneyView::new(month.activity, &currency),
        to_be_budgeted: MoneyView::new(month.to_be_budgeted, &currency),
        age_of_money: month.age_of_money,
    };

    success("summary", data)
}
