use crate::records::TransactionRecord;

/// Approved, non-deleted transactions, newest first, at most `limit` of them.
///
/// The sort is stable: transactions sharing a date keep the order the API
/// returned them in.
pub fn filter_approved_recent(
    transactions: Vec<TransactionRecord>,
    limit: usize,
) -> Vec<TransactionRecord> {
    newest_first(
        transactions
            .into_iter()
            .filter(|transaction| transaction.approved && !transaction.deleted)
            .collect(),
        limit,
    )
}

/// Like [`filter_approved_recent`] but keeps transactions awaiting approval.
pub fn filter_recent(transactions: Vec<TransactionRecord>, limit: usize) -> Vec<TransactionRecord> {
    newest_first(
        transactions
            .into_iter()
            .filter(|transaction| !transaction.deleted)
            .collect(),
        limit,
    )
}

fn newest_first(mut transactions: Vec<TransactionRecord>, limit: usize) -> Vec<TransactionRecord> {
    transactions.sort_by(|left, right| right.date.cmp(&left.date));
    transactions.truncate(limit);
    transactions
}
