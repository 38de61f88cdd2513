use chrono::NaiveDate;

use crate::api::{BudgetApi, TransactionScope, TransactionsRequest};
use crate::commands::TransactionsParams;
use crate::commands::common::resolve_limit;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    CreatedTransactionData, TransactionRow, TransactionScopeView, TransactionsData,
};
use crate::normalize::{
    TransactionDraft, build_outbound_transaction, filter_approved_recent, filter_recent,
};
use crate::settings::Session;
use crate::{ClientError, ClientResult};

pub async fn list(
    api: &dyn BudgetApi,
    session: &Session,
    params: &TransactionsParams,
) -> ClientResult<SuccessEnvelope> {
    let scope = scope_for(params)?;
    let limit = resolve_limit(params.limit, session.default_limit);
    let request = TransactionsRequest {
        scope: scope.clone(),
        since_date: params.since_date,
    };

    let fetched = api.transactions(&session.budget_id, &request).await?;
    let recent = if params.include_unapproved {
        filter_recent(fetched, limit)
    } else {
        filter_approved_recent(fetched, limit)
    };

    let data = TransactionsData {
        budget_id: session.budget_id.clone(),
        scope: scope_view(&scope),
        since_date: params.since_date,
        limit,
        include_unapproved: params.include_unapproved,
        rows: recent
            .iter()
            .map(|record| TransactionRow::from_record(record, &session.currency))
            .collect(),
    };

    success("transactions", data)
}

/// Validates `draft` locally, then submits it. Nothing is sent when
/// validation fails.
pub async fn create(
    api: &dyn BudgetApi,
    session: &Session,
    draft: TransactionDraft,
    today: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    let outbound = build_outbound_transaction(draft, today)?;
    let created = api
        .create_transaction(&session.budget_id, &outbound)
        .await?;
    tracing::info!(transaction_id = %created.id, "transaction created");

    success(
        "transaction create",
        CreatedTransactionData {
            budget_id: session.budget_id.clone(),
            transaction: TransactionRow::from_record(&created, &session.currency),
        },
    )
}

fn scope_for(params: &TransactionsParams) -> ClientResult<TransactionScope> {
    match (non_blank(&params.account_id), non_blank(&params.category_id)) {
        (Some(_), Some(_)) => Err(ClientError::invalid_argument_for_command(
            "Filter by an account or by a category, not both.",
            Some("transactions"),
        )),
        (Some(account_id), None) => Ok(TransactionScope::Account(account_id)),
        (None, Some(category_id)) => Ok(TransactionScope::Category(category_id)),
        (None, None) => Ok(TransactionScope::Budget),
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn scope_view(scope: &TransactionScope) -> TransactionScopeView {
    match scope {
        TransactionScope::Budget => TransactionScopeView {
            kind: "budget".to_string(),
            id: None,
        },
        TransactionScope::Account(id) => TransactionScopeView {
            kind: "account".to_string(),
            id: Some(id.clone()),
        },
        TransactionScope::Category(id) => TransactionScopeView {
            kind: "category".to_string(),
            id: Some(id.clone()),
        },
    }
}
