//! Pure shaping of API records into what the commands print.
//!
//! Nothing in here performs I/O or holds state.

mod accounts;
mod categories;
mod money;
mod outbound;
mod payees;
mod transactions;

pub use accounts::{aggregate_on_budget_balance, open_accounts};
pub use categories::{group_visible_categories, visible_categories};
pub use money::{CurrencyFormat, Milliunits, format_currency, parse_amount, to_milliunits};
pub use outbound::{OutboundTransaction, TransactionDraft, build_outbound_transaction};
pub use payees::search_payees;
pub use transactions::{filter_approved_recent, filter_recent};
