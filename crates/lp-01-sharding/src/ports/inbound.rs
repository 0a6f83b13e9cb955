//! Inbound port: what the sharding subsystem can do for its consumers.

use crate::domain::ShardError;
use shared_types::ShardId;

/// Address-to-shard routing capability.
///
/// Implementations must be pure: the same address always maps to the same
/// shard for a fixed shard count. Tests supply alternative implementations to
/// pin routing decisions.
pub trait ShardCoordinator: Send + Sync {
    /// Compute the shard owning the account with the given public key bytes.
    fn compute_shard_id(&self, address: &[u8]) -> Result<ShardId, ShardError>;

    /// Number of regular shards (the metachain not included).
    fn num_shards(&self) -> u32;

    /// Every shard id the proxy serves: `[0, 1, …, num_shards - 1]` followed
    /// by the metachain id, in exactly that order.
    fn all_shard_ids(&self) -> Vec<ShardId>;
}
