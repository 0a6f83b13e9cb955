//! Error types for address-to-shard routing.

use thiserror::Error;

/// Sharding error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShardError {
    /// The address bytes cannot be routed (empty input).
    #[error("invalid address for shard computation")]
    InvalidAddress,

    /// A coordinator cannot be built for this shard count.
    #[error("invalid number of shards: {0}")]
    InvalidNumberOfShards(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_error_message() {
        assert!(ShardError::InvalidAddress.to_string().contains("address"));
    }

    #[test]
    fn test_invalid_number_of_shards_error_message() {
        assert!(ShardError::InvalidNumberOfShards(0).to_string().contains('0'));
    }
}
