use crate::ClientResult;
use crate::api::{BudgetApi, MonthSelector};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoryRow, MoneyView, MonthData};
use crate::normalize::visible_categories;
use crate::settings::Session;

pub async fn run(
    api: &dyn BudgetApi,
    session: &Session,
    selector: MonthSelector,
) -> ClientResult<SuccessEnvelope> {
    let month = api.month(&session.budget_id, selector).await?;
    let currency = &session.currency;

    let data = MonthData {
        budget_id: session.budget_id.clone(),
        month: month.month,
        income: MoneyView::new(month.income, currency),
        budgeted: MoneyView::new(month.budgeted, currency),
        activity: MoneyView::new(month.activity, currency),
        to_be_budgeted: MoneyView::new(month.to_be_budgeted, currency),
        age_of_money: month.age_of_money,
        categories: visible_categories(month.categories)
            .iter()
            .map(|category| CategoryRow::from_record(category, currency))
            .collect(),
        note: month.note,
    };

    success("month", data)
}
