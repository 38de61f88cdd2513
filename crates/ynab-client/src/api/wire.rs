use serde::{Deserialize, Serialize};

use crate::normalize::{CurrencyFormat, OutboundTransaction};
use crate::records::{
    AccountRecord, BudgetSummary, CategoryGroup, MonthDetail, PayeeRecord, TransactionRecord,
    UserRecord,
};

/// Every successful response wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(super) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorDetail {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserData {
    pub user: UserRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct BudgetsData {
    pub budgets: Vec<BudgetSummary>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BudgetSettingsData {
    pub settings: BudgetSettings,
}

#[derive(Debug, Deserialize)]
pub(super) struct BudgetSettings {
    #[serde(default)]
    pub currency_format: Option<CurrencyFormat>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AccountsData {
    pub accounts: Vec<AccountRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TransactionsData {
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TransactionData {
    pub transaction: TransactionRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct CategoriesData {
    pub category_groups: Vec<CategoryGroup>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MonthData {
    pub month: MonthDetail,
}

#[derive(Debug, Deserialize)]
pub(super) struct PayeesData {
    pub payees: Vec<PayeeRecord>,
}

#[derive(Debug, Serialize)]
pub(super) struct SaveTransactionBody<'a> {
    pub transaction: &'a OutboundTransaction,
}
