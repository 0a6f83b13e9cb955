//! # LP-01 Sharding
//!
//! Deterministic routing of account addresses to shards.
//!
//! The proxy must mirror the chain's own assignment rule bit-exactly: an
//! account lives on the shard derived from the low bits of the last byte of
//! its public key, with a mask fallback that keeps the result inside
//! `[0, num_shards)` when the shard count is not a power of two. The
//! distinguished metachain shard coordinates all others and is always the
//! last entry of [`ShardCoordinator::all_shard_ids`].
//!
//! ## Module Structure
//!
//! ```text
//! lp-01-sharding/
//! ├── domain/          # ShardError
//! ├── algorithms/      # Mask computation + AddressShardCoordinator
//! └── ports/           # ShardCoordinator trait
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;

pub use algorithms::AddressShardCoordinator;
pub use domain::ShardError;
pub use ports::ShardCoordinator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
