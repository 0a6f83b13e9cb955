//! # Network Status Provider
//!
//! Chain progress metrics from observers, including the synchronization
//! anchor for hyperblocks: the minimum `highestFinalNonce` across all
//! metachain observers. A hyperblock at or below that nonce is guaranteed
//! fully notarized on every shard.

use crate::domain::BlockError;
use lp_03_dispatch::Dispatcher;
use shared_types::{
    NetworkConfig, NetworkConfigPayload, NetworkStatus, NetworkStatusPayload, ShardId,
    METACHAIN_SHARD_ID,
};
use std::sync::Arc;
use tracing::{debug, warn};

const NODE_STATUS_PATH: &str = "/node/status";
const NETWORK_CONFIG_PATH: &str = "/network/config";

/// Network status and configuration reads.
pub struct NetworkStatusProvider {
    dispatcher: Arc<Dispatcher>,
}

impl NetworkStatusProvider {
    /// Create a provider over the dispatch engine.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Status metrics of one shard, from the first answering observer.
    pub async fn get_network_status(&self, shard_id: ShardId) -> Result<NetworkStatus, BlockError> {
        let dispatcher = self.dispatcher.as_ref();
        let payload: NetworkStatusPayload = dispatcher
            .try_on_shard(shard_id, |observer| async move {
                dispatcher.observer_get(&observer, NODE_STATUS_PATH).await
            })
            .await?;

        Ok(payload.metrics)
    }

    /// Chain-wide constants, from the first observer of any shard that
    /// answers.
    pub async fn get_network_config(&self) -> Result<NetworkConfig, BlockError> {
        let dispatcher = self.dispatcher.as_ref();
        let payload: NetworkConfigPayload = dispatcher
            .try_on_all_shards(|observer| async move {
                dispatcher
                    .observer_get(&observer, NETWORK_CONFIG_PATH)
                    .await
            })
            .await?;

        Ok(payload.config)
    }

    /// The highest hyperblock nonce guaranteed fully synchronized: the
    /// minimum `highestFinalNonce` reported by the metachain observers.
    ///
    /// Observers that fail to answer are skipped; the value is the minimum
    /// over those that did. Only when every metachain observer fails is the
    /// call an error.
    pub async fn get_latest_fully_synchronized_hyperblock_nonce(
        &self,
    ) -> Result<u64, BlockError> {
        let observers = self.dispatcher.observers(METACHAIN_SHARD_ID)?;

        let mut minimum: Option<u64> = None;
        for observer in observers {
            let status: Result<NetworkStatusPayload, _> = self
                .dispatcher
                .observer_get(&observer, NODE_STATUS_PATH)
                .await;

            match status {
                Ok(payload) => {
                    let nonce = payload.metrics.highest_final_nonce;
                    debug!(observer = %observer.address, nonce, "[lp-04] final nonce reported");
                    minimum = Some(minimum.map_or(nonce, |m| m.min(nonce)));
                }
                Err(err) => {
                    warn!(observer = %observer.address, error = %err, "[lp-04] status query failed");
                }
            }
        }

        minimum.ok_or(BlockError::MetachainStatusUnavailable)
    }
}
