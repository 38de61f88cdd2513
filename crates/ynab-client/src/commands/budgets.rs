use crate::ClientResult;
use crate::api::BudgetApi;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BudgetRow, BudgetsData};

pub async fn run(api: &dyn BudgetApi) -> ClientResult<SuccessEnvelope> {
    let budgets = api.budgets().await?;
    let rows = budgets
        .into_iter()
        .map(|budget| BudgetRow {
            id: budget.id,
            name: budget.name,
            last_modified_on: budget.last_modified_on,
            first_month: budget.first_month,
            last_month: budget.last_month,
            currency: budget.currency_format.map(|format| format.iso_code),
        })
        .collect::<Vec<BudgetRow>>();

    success(
        "budgets",
        BudgetsData {
            total: rows.len(),
            rows,
        },
    )
}
