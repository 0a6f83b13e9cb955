//! Error types for the observer pools.

use shared_types::ShardId;
use thiserror::Error;

/// Observer pool error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// A pool cannot be built from an empty observer list.
    #[error("empty observers list")]
    EmptyObserversList,

    /// No observers are configured for the requested shard.
    #[error("observers for shard {0} not available")]
    ShardNotAvailable(ShardId),
}
