//! # Hyperblock Aggregator
//!
//! Joins a metachain block with every shard block it notarizes into one
//! atomic view of the round.
//!
//! The shard fetches run concurrently and fail fast: a hyperblock is either
//! complete or an error, never partial. `shard_blocks` keeps the meta block's
//! notarization order, and `transactions` concatenates the per-block
//! selections in that same order, metachain-issued transactions first.

use crate::algorithms::{executed_transactions, metachain_issued_transactions};
use crate::domain::BlockError;
use crate::provider::BlockProvider;
use futures::future::try_join_all;
use shared_types::{Block, Hyperblock, METACHAIN_SHARD_ID};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Composes hyperblocks out of metachain and shard block reads.
pub struct HyperblockAggregator {
    blocks: Arc<BlockProvider>,
}

impl HyperblockAggregator {
    /// Create an aggregator over the block provider.
    pub fn new(blocks: Arc<BlockProvider>) -> Self {
        Self { blocks }
    }

    /// The hyperblock anchored at the metachain block with this nonce.
    pub async fn get_hyperblock_by_nonce(&self, nonce: u64) -> Result<Hyperblock, BlockError> {
        let meta_block = self
            .blocks
            .get_block_by_nonce(METACHAIN_SHARD_ID, nonce, true)
            .await?;

        self.build(meta_block).await
    }

    /// The hyperblock anchored at the metachain block with this hash.
    pub async fn get_hyperblock_by_hash(&self, hash: &str) -> Result<Hyperblock, BlockError> {
        let meta_block = self
            .blocks
            .get_block_by_hash(METACHAIN_SHARD_ID, hash, true)
            .await?;

        self.build(meta_block).await
    }

    async fn build(&self, meta_block: Block) -> Result<Hyperblock, BlockError> {
        let notarized = meta_block.notarized_blocks.clone().unwrap_or_default();

        let fetches = notarized
            .iter()
            .filter(|entry| entry.shard != METACHAIN_SHARD_ID)
            .map(|entry| self.blocks.get_block_by_hash(entry.shard, &entry.hash, true));
        let shard_blocks = try_join_all(fetches).await?;

        debug!(
            nonce = meta_block.nonce,
            notarized = notarized.len(),
            "[lp-04] assembling hyperblock"
        );

        let mut transactions = metachain_issued_transactions(&meta_block);
        for block in &shard_blocks {
            transactions.extend(executed_transactions(block));
        }

        // The destination-side selection already makes cross-shard
        // transactions unique; the retain is the invariant's backstop.
        let mut seen = HashSet::new();
        transactions.retain(|tx| seen.insert(tx.hash.clone()));

        Ok(Hyperblock {
            nonce: meta_block.nonce,
            round: meta_block.round,
            hash: meta_block.hash,
            prev_block_hash: meta_block.prev_block_hash,
            epoch: meta_block.epoch,
            num_txs: transactions.len() as u32,
            shard_blocks: notarized,
            transactions,
        })
    }
}
