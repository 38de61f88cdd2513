//! Records as the YNAB API returns them.
//!
//! Only the fields the commands read are declared; serde ignores the rest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::{CurrencyFormat, Milliunits};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_modified_on: Option<String>,
    #[serde(default)]
    pub first_month: Option<NaiveDate>,
    #[serde(default)]
    pub last_month: Option<NaiveDate>,
    #[serde(default)]
    pub currency_format: Option<CurrencyFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub on_budget: bool,
    pub closed: bool,
    pub balance: Milliunits,
    #[serde(default)]
    pub cleared_balance: Option<Milliunits>,
    #[serde(default)]
    pub uncleared_balance: Option<Milliunits>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    Cleared,
    Uncleared,
    Reconciled,
}

impl ClearedStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleared => "cleared",
            Self::Uncleared => "uncleared",
            Self::Reconciled => "reconciled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub amount: Milliunits,
    #[serde(default)]
    pub memo: Option<String>,
    pub cleared: ClearedStatus,
    pub approved: bool,
    #[serde(default)]
    pub flag_color: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    pub account_name: String,
    #[serde(default)]
    pub payee_id: Option<String>,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category_group_name: Option<String>,
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    pub budgeted: Milliunits,
    pub activity: Milliunits,
    pub balance: Milliunits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub name: String,
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDetail {
    pub month: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
    pub income: Milliunits,
    pub budgeted: Milliunits,
    pub activity: Milliunits,
    pub to_be_budgeted: Milliunits,
    #[serde(default)]
    pub age_of_money: Option<i64>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub transfer_account_id: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}
