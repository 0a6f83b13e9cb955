//! # Transaction Union Rules
//!
//! Which transactions of a block count as fully executed for a hyperblock.
//!
//! A transaction is taken from a shard block iff its miniblock type is final
//! and the miniblock's destination equals the block's own shard. A
//! cross-shard transaction is therefore skipped on its source side and picked
//! up exactly once, from the destination shard's block. The metachain block
//! contributes its own metachain-issued miniblocks (rewards et al.) under the
//! same type filter.

use shared_types::{Block, FullTransaction, METACHAIN_SHARD_ID};

/// Transactions of a shard block that finished executing in that shard.
pub fn executed_transactions(block: &Block) -> Vec<FullTransaction> {
    let mut selected = Vec::new();

    for mini_block in block.mini_blocks.iter().flatten() {
        if !mini_block.mb_type.is_final() {
            continue;
        }
        if mini_block.destination_shard != block.shard {
            continue;
        }

        selected.extend(mini_block.transactions.iter().flatten().cloned());
    }

    selected
}

/// Transactions issued by the metachain itself inside a metachain block.
pub fn metachain_issued_transactions(meta_block: &Block) -> Vec<FullTransaction> {
    let mut selected = Vec::new();

    for mini_block in meta_block.mini_blocks.iter().flatten() {
        if !mini_block.mb_type.is_final() {
            continue;
        }
        if mini_block.source_shard != METACHAIN_SHARD_ID {
            continue;
        }

        selected.extend(mini_block.transactions.iter().flatten().cloned());
    }

    selected
}
