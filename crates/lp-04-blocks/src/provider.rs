//! # Block Provider
//!
//! Fetches single blocks by nonce or hash from one shard via the dispatcher.

use crate::domain::BlockError;
use lp_03_dispatch::Dispatcher;
use shared_types::{Block, BlockPayload, ShardId, METACHAIN_SHARD_ID};
use std::sync::Arc;
use tracing::debug;

/// Shard-routed block reads.
pub struct BlockProvider {
    dispatcher: Arc<Dispatcher>,
}

impl BlockProvider {
    /// Create a provider over the dispatch engine.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the block at `nonce` from the given shard.
    pub async fn get_block_by_nonce(
        &self,
        shard_id: ShardId,
        nonce: u64,
        with_txs: bool,
    ) -> Result<Block, BlockError> {
        self.ensure_known_shard(shard_id)?;

        let path = format!("/block/by-nonce/{}?withTxs={}", nonce, with_txs);
        debug!(shard_id, nonce, "[lp-04] fetching block by nonce");
        self.fetch(shard_id, &path).await
    }

    /// Fetch the block with the given hash from the given shard.
    pub async fn get_block_by_hash(
        &self,
        shard_id: ShardId,
        hash: &str,
        with_txs: bool,
    ) -> Result<Block, BlockError> {
        self.ensure_known_shard(shard_id)?;

        let path = format!("/block/by-hash/{}?withTxs={}", hash, with_txs);
        debug!(shard_id, hash, "[lp-04] fetching block by hash");
        self.fetch(shard_id, &path).await
    }

    async fn fetch(&self, shard_id: ShardId, path: &str) -> Result<Block, BlockError> {
        let dispatcher = self.dispatcher.as_ref();
        let payload: BlockPayload = dispatcher
            .try_on_shard(shard_id, |observer| async move {
                dispatcher.observer_get(&observer, path).await
            })
            .await?;

        Ok(payload.block)
    }

    fn ensure_known_shard(&self, shard_id: ShardId) -> Result<(), BlockError> {
        if shard_id == METACHAIN_SHARD_ID || shard_id < self.dispatcher.num_shards() {
            Ok(())
        } else {
            Err(BlockError::InvalidShardId(shard_id))
        }
    }
}
