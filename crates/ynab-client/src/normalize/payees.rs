use crate::records::PayeeRecord;

/// Case-insensitive substring match on payee names. An empty query matches
/// every payee that is not deleted.
pub fn search_payees(payees: Vec<PayeeRecord>, query: &str, limit: usize) -> Vec<PayeeRecord> {
    let needle = query.trim().to_lowercase();
    payees
        .into_iter()
        .filter(|payee| !payee.deleted)
        .filter(|payee| needle.is_empty() || payee.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
