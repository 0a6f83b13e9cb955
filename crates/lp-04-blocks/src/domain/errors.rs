//! Error types for block reads and aggregation.

use lp_03_dispatch::DispatchError;
use shared_types::ShardId;
use thiserror::Error;

/// Block subsystem error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// The requested shard id is not served by this proxy.
    #[error("invalid shard id: {0}")]
    InvalidShardId(ShardId),

    /// No metachain observer could report a network status.
    #[error("network status unavailable from all metachain observers")]
    MetachainStatusUnavailable,

    /// The underlying dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl BlockError {
    /// The HTTP status the outer handler should relay for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidShardId(_) => 400,
            Self::MetachainStatusUnavailable => 502,
            Self::Dispatch(inner) => inner.http_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shard_maps_to_400() {
        assert_eq!(BlockError::InvalidShardId(7).http_status(), 400);
    }

    #[test]
    fn test_dispatch_error_status_is_relayed() {
        let err = BlockError::Dispatch(DispatchError::Remote {
            status: 404,
            message: "block not found".to_string(),
        });
        assert_eq!(err.http_status(), 404);
    }
}
