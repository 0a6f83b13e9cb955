//! Canonical transaction hashing.

mod tx_hash;

pub use tx_hash::compute_transaction_hash;
