//! Inbound port: observer lookup as consumed by the dispatcher.

use crate::domain::ObserverError;
use shared_types::{NodeData, ShardId};

/// Observer lookup capability.
///
/// Implementations must hand out independent copies: callers are free to sort
/// or truncate the returned list without affecting later calls.
pub trait NodesProvider: Send + Sync {
    /// All observers of one shard, in the order the caller should try them.
    fn get_by_shard(&self, shard_id: ShardId) -> Result<Vec<NodeData>, ObserverError>;

    /// All configured observers across every shard.
    fn get_all(&self) -> Result<Vec<NodeData>, ObserverError>;
}
