mod http;
mod wire;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::ClientResult;
use crate::normalize::OutboundTransaction;
use crate::records::{
    AccountRecord, BudgetSummary, CategoryGroup, MonthDetail, PayeeRecord, TransactionRecord,
    UserRecord,
};

pub use http::HttpBudgetApi;

/// Which transaction list endpoint to read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransactionScope {
    #[default]
    Budget,
    Account(String),
    Category(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionsRequest {
    pub scope: TransactionScope,
    pub since_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthSelector {
    #[default]
    Current,
    /// First day of the month.
    Month(NaiveDate),
}

/// The remote budgeting service. Calls are passed through as-is: no retries,
/// paging or token refresh happen behind this trait.
#[async_trait]
pub trait BudgetApi: Send + Sync {
    async fn user(&self) -> ClientResult<UserRecord>;

    async fn budgets(&self) -> ClientResult<Vec<BudgetSummary>>;

    async fn budget(&self, budget_id: &str) -> ClientResult<BudgetSummary>;

    async fn accounts(&self, budget_id: &str) -> ClientResult<Vec<AccountRecord>>;

    async fn transactions(
        &self,
        budget_id: &str,
        request: &TransactionsRequest,
    ) -> ClientResult<Vec<TransactionRecord>>;

    async fn category_groups(&self, budget_id: &str) -> ClientResult<Vec<CategoryGroup>>;

    async fn month(&self, budget_id: &str, month: MonthSelector) -> ClientResult<MonthDetail>;

    async fn payees(&self, budget_id: &str) -> ClientResult<Vec<PayeeRecord>>;

    async fn create_transaction(
        &self,
        budget_id: &str,
        transaction: &OutboundTransaction,
    ) -> ClientResult<TransactionRecord>;
}
