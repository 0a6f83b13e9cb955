//! Block, miniblock, and hyperblock structures.

use crate::nodes::ShardId;
use crate::transaction::FullTransaction;
use serde::{Deserialize, Serialize};

/// A block as returned by an observer's `/block/by-nonce` and `/block/by-hash`
/// endpoints.
///
/// `notarized_blocks` appears only on metachain blocks; `mini_blocks` appears
/// when transaction details were requested with `withTxs=true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub nonce: u64,
    pub round: u64,
    pub hash: String,
    pub prev_block_hash: String,
    pub epoch: u32,
    pub shard: ShardId,
    pub num_txs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notarized_blocks: Option<Vec<NotarizedBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_blocks: Option<Vec<MiniBlock>>,
}

/// A shard block hash recorded inside a metachain block, signifying consensus
/// acceptance of that block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotarizedBlock {
    pub hash: String,
    pub nonce: u64,
    pub shard: ShardId,
}

/// A per-(source shard, destination shard, type) group of transactions inside
/// a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniBlock {
    pub hash: String,
    #[serde(rename = "type")]
    pub mb_type: MiniBlockType,
    pub source_shard: ShardId,
    pub destination_shard: ShardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<FullTransaction>>,
}

/// Miniblock classifier. The set is fixed by the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiniBlockType {
    TxBlock,
    StateBlock,
    PeerBlock,
    SmartContractResultBlock,
    InvalidBlock,
    ReceiptBlock,
    RewardsBlock,
}

impl MiniBlockType {
    /// True for miniblock types whose transactions count as fully executed
    /// once landed in their destination shard. Only these contribute to a
    /// hyperblock's transaction union.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::TxBlock | Self::RewardsBlock | Self::SmartContractResultBlock | Self::InvalidBlock
        )
    }
}

/// The logical composition of a metachain block with all the shard blocks it
/// notarizes: one atomic view of a round.
///
/// `transactions` is the union of fully executed transactions across
/// `shard_blocks` — no duplicates, cross-shard transactions counted exactly
/// once (on their destination side).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hyperblock {
    pub nonce: u64,
    pub round: u64,
    pub hash: String,
    pub prev_block_hash: String,
    pub epoch: u32,
    pub num_txs: u32,
    pub shard_blocks: Vec<NotarizedBlock>,
    pub transactions: Vec<FullTransaction>,
}

/// Payload of a block response: `{data: {block: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPayload {
    pub block: Block,
}

/// Payload of a hyperblock response: `{data: {hyperblock: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HyperblockPayload {
    pub hyperblock: Hyperblock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_miniblock_types() {
        assert!(MiniBlockType::TxBlock.is_final());
        assert!(MiniBlockType::RewardsBlock.is_final());
        assert!(MiniBlockType::SmartContractResultBlock.is_final());
        assert!(MiniBlockType::InvalidBlock.is_final());
        assert!(!MiniBlockType::StateBlock.is_final());
        assert!(!MiniBlockType::PeerBlock.is_final());
        assert!(!MiniBlockType::ReceiptBlock.is_final());
    }

    #[test]
    fn test_block_wire_field_names() {
        let block = Block {
            nonce: 7,
            hash: "aa".to_string(),
            prev_block_hash: "bb".to_string(),
            ..Block::default()
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"prevBlockHash\":\"bb\""));
        assert!(json.contains("\"numTxs\":0"));
        // Optional sections are omitted entirely when absent.
        assert!(!json.contains("notarizedBlocks"));
        assert!(!json.contains("miniBlocks"));
    }

    #[test]
    fn test_miniblock_type_wire_name() {
        let mb = MiniBlock {
            hash: "mb".to_string(),
            mb_type: MiniBlockType::TxBlock,
            source_shard: 0,
            destination_shard: 1,
            transactions: None,
        };
        let json = serde_json::to_string(&mb).unwrap();
        assert!(json.contains("\"type\":\"TxBlock\""));
        assert!(json.contains("\"destinationShard\":1"));
    }

    #[test]
    fn test_meta_block_round_trip() {
        let json = r#"{
            "nonce": 100, "round": 101, "hash": "meta", "prevBlockHash": "prev",
            "epoch": 2, "shard": 4294967295, "numTxs": 0,
            "notarizedBlocks": [{"hash": "h0", "nonce": 99, "shard": 0}]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.shard, crate::nodes::METACHAIN_SHARD_ID);
        let notarized = block.notarized_blocks.as_deref().unwrap();
        assert_eq!(notarized.len(), 1);
        assert_eq!(notarized[0].shard, 0);
    }
}
