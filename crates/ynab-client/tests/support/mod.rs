#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use ynab_client::api::{BudgetApi, MonthSelector, TransactionsRequest};
use ynab_client::normalize::{CurrencyFormat, Milliunits, OutboundTransaction};
use ynab_client::records::{
    AccountRecord, BudgetSummary, CategoryGroup, CategoryRecord, ClearedStatus, MonthDetail,
    PayeeRecord, TransactionRecord, UserRecord,
};
use ynab_client::{ClientError, ClientResult};

pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_default()
}

pub fn account(id: &str, balance: i64, closed: bool, on_budget: bool) -> AccountRecord {
    AccountRecord {
        id: id.to_string(),
        name: format!("{id} account"),
        account_type: "checking".to_string(),
        on_budget,
        closed,
        balance: Milliunits::new(balance),
        cleared_balance: None,
        uncleared_balance: None,
        deleted: false,
    }
}

pub fn transaction(id: &str, day: &str, amount: i64, approved: bool) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        date: date(day),
        amount: Milliunits::new(amount),
        memo: None,
        cleared: ClearedStatus::Cleared,
        approved,
        flag_color: None,
        account_id: Some("acct-1".to_string()),
        account_name: "Checking".to_string(),
        payee_id: None,
        payee_name: Some(format!("payee {id}")),
        category_id: None,
        category_name: Some("Groceries".to_string()),
        deleted: false,
    }
}

pub fn category(name: &str, hidden: bool, balance: i64) -> CategoryRecord {
    CategoryRecord {
        id: format!("cat-{name}"),
        name: name.to_string(),
        category_group_name: None,
        hidden,
        deleted: false,
        budgeted: Milliunits::new(balance),
        activity: Milliunits::ZERO,
        balance: Milliunits::new(balance),
    }
}

pub fn euro() -> CurrencyFormat {
    CurrencyFormat {
        iso_code: "EUR".to_string(),
        decimal_digits: 2,
        decimal_separator: ",".to_string(),
        group_separator: ".".to_string(),
        symbol_first: false,
        currency_symbol: "€".to_string(),
        display_symbol: true,
    }
}

/// In-memory [`BudgetApi`] that records the calls it receives.
pub struct FakeBudgetApi {
    pub budget: BudgetSummary,
    pub accounts: Vec<AccountRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub groups: Vec<CategoryGroup>,
    pub month: MonthDetail,
    pub payees: Vec<PayeeRecord>,
    pub fail_on: Option<&'static str>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<OutboundTransaction>>,
}

impl Default for FakeBudgetApi {
    fn default() -> Self {
        Self {
            budget: BudgetSummary {
                id: "budget-1".to_string(),
                name: "Household".to_string(),
                last_modified_on: Some("2024-01-03T10:00:00+00:00".to_string()),
                first_month: Some(date("2023-01-01")),
                last_month: Some(date("2024-01-01")),
                currency_format: None,
            },
            accounts: vec![
                account("checking", 1_500_000, false, true),
                account("savings", 250_000, false, true),
                account("old-card", -40_000, true, true),
                account("mortgage", -200_000_000, false, false),
            ],
            transactions: vec![
                transaction("t1", "2024-01-01", -12_000, true),
                transaction("t3", "2024-01-03", -4_500, true),
                transaction("pending", "2024-01-04", -9_990, false),
                transaction("t2", "2024-01-02", 100_000, true),
            ],
            groups: vec![
                CategoryGroup {
                    id: "grp-bills".to_string(),
                    name: "Bills".to_string(),
                    hidden: false,
                    deleted: false,
                    categories: vec![category("Rent", false, 900_000), category("Old", true, 0)],
                },
                CategoryGroup {
                    id: "grp-hidden".to_string(),
                    name: "Hidden Categories".to_string(),
                    hidden: true,
                    deleted: false,
                    categories: vec![category("Archived", false, 0)],
                },
            ],
            month: MonthDetail {
                month: date("2024-01-01"),
                note: None,
                income: Milliunits::new(3_000_000),
                budgeted: Milliunits::new(2_500_000),
                activity: Milliunits::new(-1_200_500),
                to_be_budgeted: Milliunits::new(500_000),
                age_of_money: Some(42),
                categories: vec![category("Rent", false, 900_000), category("Old", true, 0)],
            },
            payees: vec![
                PayeeRecord {
                    id: "p1".to_string(),
                    name: "Whole Foods".to_string(),
                    transfer_account_id: None,
                    deleted: false,
                },
                PayeeRecord {
                    id: "p2".to_string(),
                    name: "Netflix".to_string(),
                    transfer_account_id: None,
                    deleted: false,
                },
                PayeeRecord {
                    id: "p3".to_string(),
                    name: "Food Truck".to_string(),
                    transfer_account_id: None,
                    deleted: true,
                },
            ],
            fail_on: None,
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }
}

impl FakeBudgetApi {
    pub fn failing_on(call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn created(&self) -> Vec<OutboundTransaction> {
        self.created
            .lock()
            .map(|created| created.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) -> ClientResult<()> {
        let name = call.split(':').next().unwrap_or_default().to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.fail_on == Some(name.as_str()) {
            return Err(ClientError::remote(
                500,
                Some("500"),
                "internal_server_error",
                "stub failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BudgetApi for FakeBudgetApi {
    async fn user(&self) -> ClientResult<UserRecord> {
        self.record("user".to_string())?;
        Ok(UserRecord {
            id: "user-1".to_string(),
        })
    }

    async fn budgets(&self) -> ClientResult<Vec<BudgetSummary>> {
        self.record("budgets".to_string())?;
        Ok(vec![self.budget.clone()])
    }

    async fn budget(&self, budget_id: &str) -> ClientResult<BudgetSummary> {
        self.record(format!("budget:{budget_id}"))?;
        Ok(self.budget.clone())
    }

    async fn accounts(&self, budget_id: &str) -> ClientResult<Vec<AccountRecord>> {
        self.record(format!("accounts:{budget_id}"))?;
        Ok(self.accounts.clone())
    }

    async fn transactions(
        &self,
        budget_id: &str,
        request: &TransactionsRequest,
    ) -> ClientResult<Vec<TransactionRecord>> {
        self.record(format!("transactions:{budget_id}:{:?}", request.scope))?;
        Ok(self.transactions.clone())
    }

    async fn category_groups(&self, budget_id: &str) -> ClientResult<Vec<CategoryGroup>> {
        self.record(format!("categories:{budget_id}"))?;
        Ok(self.groups.clone())
    }

    async fn month(&self, budget_id: &str, month: MonthSelector) -> ClientResult<MonthDetail> {
        self.record(format!("month:{budget_id}:{month:?}"))?;
        Ok(self.month.clone())
    }

    async fn payees(&self, budget_id: &str) -> ClientResult<Vec<PayeeRecord>> {
        self.record(format!("payees:{budget_id}"))?;
        Ok(self.payees.clone())
    }

    async fn create_transaction(
        &self,
        budget_id: &str,
        transaction: &OutboundTransaction,
    ) -> ClientResult<TransactionRecord> {
        self.record(format!("create:{budget_id}"))?;
        if let Ok(mut created) = self.created.lock() {
            created.push(transaction.clone());
        }
        Ok(TransactionRecord {
            id: "created-1".to_string(),
            date: transaction.date,
            amount: transaction.amount,
            memo: transaction.memo.clone(),
            cleared: ClearedStatus::Uncleared,
            approved: transaction.approved,
            flag_color: None,
            account_id: Some(transaction.account_id.clone()),
            account_name: "Checking".to_string(),
            payee_id: None,
            payee_name: transaction.payee_name.clone(),
            category_id: transaction.category_id.clone(),
            category_name: None,
            deleted: false,
        })
    }
}
