use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::normalize::money::{parse_amount, to_milliunits};
use crate::normalize::Milliunits;
use crate::{ClientError, ClientResult};

/// Transaction fields as a user typed them. Nothing is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionDraft {
    #[serde(default)]
    pub account_id: Option<String>,
    /// Major-unit amount text, e.g. `-12.50`.
    #[serde(default, deserialize_with = "amount_text")]
    pub amount: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, alias = "payee")]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub approved: Option<bool>,
}

/// The body sent to `POST /budgets/{budget_id}/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundTransaction {
    pub account_id: String,
    pub date: NaiveDate,
    pub amount: Milliunits,
    pub payee_name: Option<String>,
    pub category_id: Option<String>,
    pub memo: Option<String>,
    pub approved: bool,
}

/// Validates a draft and fills defaults. `today` stands in for a missing date.
pub fn build_outbound_transaction(
    draft: TransactionDraft,
    today: NaiveDate,
) -> ClientResult<OutboundTransaction> {
    let account_id = non_blank(draft.account_id).ok_or_else(ClientError::missing_account_id)?;
    let amount_text = draft.amount.ok_or_else(ClientError::invalid_amount)?;
    let amount = to_milliunits(parse_amount(&amount_text)?)?;

    Ok(OutboundTransaction {
        account_id,
        date: draft.date.unwrap_or(today),
        amount,
        payee_name: non_blank(draft.payee_name),
        category_id: non_blank(draft.category_id),
        memo: non_blank(draft.memo),
        approved: draft.approved.unwrap_or(true),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

// Scripted callers send amounts as JSON numbers or strings; both become text
// so the decimal parser sees exactly what was written.
fn amount_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
