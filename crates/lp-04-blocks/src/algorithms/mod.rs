//! Pure transaction-selection rules for the hyperblock union.

mod tx_union;

pub use tx_union::{executed_transactions, metachain_issued_transactions};
