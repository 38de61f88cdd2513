use chrono::NaiveDate;
use serde::Serialize;

use crate::normalize::{CurrencyFormat, Milliunits};
use crate::records::{AccountRecord, CategoryRecord, PayeeRecord, TransactionRecord};

/// An amount as both raw milliunits and display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyView {
    pub milliunits: i64,
    pub formatted: String,
}

impl MoneyView {
    pub fn new(amount: Milliunits, currency: &CurrencyFormat) -> Self {
        Self {
            milliunits: amount.value(),
            formatted: currency.format(amount),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRow {
    pub id: String,
    pub name: String,
    pub last_modified_on: Option<String>,
    pub first_month: Option<NaiveDate>,
    pub last_month: Option<NaiveDate>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetsData {
    pub total: usize,
    pub rows: Vec<BudgetRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub on_budget: bool,
    pub closed: bool,
    pub balance: MoneyView,
}

impl AccountRow {
    pub fn from_record(record: &AccountRecord, currency: &CurrencyFormat) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            account_type: record.account_type.clone(),
            on_budget: record.on_budget,
            closed: record.closed,
            balance: MoneyView::new(record.balance, currency),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountsData {
    pub budget_id: String,
    pub include_closed: bool,
    pub on_budget_balance: MoneyView,
    pub rows: Vec<AccountRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: NaiveDate,
    pub amount: MoneyView,
    pub payee: Option<String>,
    pub category: Option<String>,
    pub account: String,
    pub memo: Option<String>,
    pub cleared: String,
    pub approved: bool,
    pub flag_color: Option<String>,
}

impl TransactionRow {
    pub fn from_record(record: &TransactionRecord, currency: &CurrencyFormat) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            amount: MoneyView::new(record.amount, currency),
            payee: record.payee_name.clone(),
            category: record.category_name.clone(),
            account: record.account_name.clone(),
            memo: record.memo.clone(),
            cleared: record.cleared.as_str().to_string(),
            approved: record.approved,
            flag_color: record.flag_color.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionScopeView {
    pub kind: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub budget_id: String,
    pub scope: TransactionScopeView,
    pub since_date: Option<NaiveDate>,
    pub limit: usize,
    pub include_unapproved: bool,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedTransactionData {
    pub budget_id: String,
    pub transaction: TransactionRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub budgeted: MoneyView,
    pub activity: MoneyView,
    pub available: MoneyView,
}

impl CategoryRow {
    pub fn from_record(record: &CategoryRecord, currency: &CurrencyFormat) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            budgeted: MoneyView::new(record.budgeted, currency),
            activity: MoneyView::new(record.activity, currency),
            available: MoneyView::new(record.balance, currency),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroupRow {
    pub id: String,
    pub name: String,
    pub categories: Vec<CategoryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub budget_id: String,
    pub groups: Vec<CategoryGroupRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthData {
    pub budget_id: String,
    pub month: NaiveDate,
    pub note: Option<String>,
    pub income: MoneyView,
    pub budgeted: MoneyView,
    pub activity: MoneyView,
    pub to_be_budgeted: MoneyView,
    pub age_of_money: Option<i64>,
    pub categories: Vec<CategoryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub budget: BudgetRef,
    pub currency: String,
    pub month: NaiveDate,
    pub on_budget_balance: MoneyView,
    pub on_budget_account_count: usize,
    pub income: MoneyView,
    pub budgeted: MoneyView,
    pub activity: MoneyView,
    pub to_be_budgeted: MoneyView,
    pub age_of_money: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayeeRow {
    pub id: String,
    pub name: String,
    pub transfer_account_id: Option<String>,
}

impl From<PayeeRecord> for PayeeRow {
    fn from(record: PayeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            transfer_account_id: record.transfer_account_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PayeesData {
    pub budget_id: String,
    pub query: String,
    pub rows: Vec<PayeeRow>,
}
