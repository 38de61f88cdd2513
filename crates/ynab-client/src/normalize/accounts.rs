use crate::normalize::Milliunits;
use crate::records::AccountRecord;

/// Total balance of open, on-budget accounts.
pub fn aggregate_on_budget_balance(accounts: &[AccountRecord]) -> Milliunits {
    accounts
        .iter()
        .filter(|account| !account.closed && account.on_budget)
        .map(|account| account.balance)
        .sum()
}

pub fn open_accounts(accounts: Vec<AccountRecord>, include_closed: bool) -> Vec<AccountRecord> {
    accounts
        .into_iter()
        .filter(|account| !account.deleted && (include_closed || !account.closed))
        .collect()
}
