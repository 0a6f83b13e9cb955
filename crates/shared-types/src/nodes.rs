//! Observer node descriptors and shard identifiers.

use serde::{Deserialize, Serialize};

/// Shard identifier.
pub type ShardId = u32;

/// The distinguished coordinating shard whose blocks notarize all other
/// shards' blocks for a round.
pub const METACHAIN_SHARD_ID: ShardId = 0xFFFF_FFFF;

/// An observer node: a non-validating backend exposing the read/submit REST
/// API, identified by its base URL and the shard it observes.
///
/// Instances are created from configuration at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Base URL of the observer, e.g. `http://10.0.0.5:8080`.
    pub address: String,
    /// Shard the observer belongs to.
    #[serde(rename = "shard_id")]
    pub shard_id: ShardId,
}

impl NodeData {
    /// Create a new observer descriptor.
    pub fn new(address: impl Into<String>, shard_id: ShardId) -> Self {
        Self {
            address: address.into(),
            shard_id,
        }
    }

    /// True when this node observes the metachain.
    pub fn is_metachain(&self) -> bool {
        self.shard_id == METACHAIN_SHARD_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metachain_constant() {
        assert_eq!(METACHAIN_SHARD_ID, u32::MAX);
    }

    #[test]
    fn test_node_data_is_metachain() {
        assert!(NodeData::new("http://meta:8080", METACHAIN_SHARD_ID).is_metachain());
        assert!(!NodeData::new("http://shard0:8080", 0).is_metachain());
    }
}
