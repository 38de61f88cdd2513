use crate::ClientResult;
use crate::api::BudgetApi;
use crate::commands::PayeesParams;
use crate::commands::common::resolve_limit;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{PayeeRow, PayeesData};
use crate::normalize::search_payees;
use crate::settings::Session;

pub async fn run(
    api: &dyn BudgetApi,
    session: &Session,
    params: &PayeesParams,
) -> ClientResult<SuccessEnvelope> {
    let limit = resolve_limit(params.limit, session.default_limit);
    let matches = search_payees(api.payees(&session.budget_id).await?, &params.query, limit);

    let data = PayeesData {
        budget_id: session.budget_id.clone(),
        query: params.query.trim().to_string(),
        rows: matches.into_iter().map(PayeeRow::from).collect(),
    };

    success("payees", data)
}
