//! # LP-05 Facade
//!
//! The thin operation layer the REST surface consumes: account lookups,
//! transaction submission and simulation, transaction lookup, and the
//! deterministic transaction hash, composed with the block, hyperblock, and
//! network status providers behind one [`ProxyFacade`].
//!
//! ## Module Structure
//!
//! ```text
//! lp-05-facade/
//! ├── domain/          # ProxyError
//! ├── algorithms/      # Canonical transaction hashing
//! ├── account.rs       # AccountProcessor
//! ├── transaction.rs   # TransactionProcessor
//! └── facade.rs        # ProxyFacade
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
pub mod algorithms;
pub mod domain;
mod facade;
#[cfg(test)]
pub(crate) mod test_support;
mod transaction;

pub use account::AccountProcessor;
pub use algorithms::compute_transaction_hash;
pub use domain::ProxyError;
pub use facade::ProxyFacade;
pub use transaction::TransactionProcessor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
