//! Transaction request and response shapes.

use crate::nodes::ShardId;
use serde::{Deserialize, Serialize};

/// A transaction as submitted by a client to `/transaction/send` or
/// `/transaction/simulate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub nonce: u64,
    /// Amount to transfer, as a base-10 string to avoid precision loss.
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub signature: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
}

/// A transaction as returned by an observer, extended with execution
/// placement and status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullTransaction {
    pub hash: String,
    pub nonce: u64,
    pub round: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub source_shard: ShardId,
    pub destination_shard: ShardId,
    pub block_nonce: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_block_hash: Option<String>,
    pub status: String,
}

/// Payload of `/transaction/send`: `{data: {txHash: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionPayload {
    pub tx_hash: String,
}

/// Payload of `/transaction/{hash}`: `{data: {transaction: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub transaction: FullTransaction,
}

/// Outcome of a transaction simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSimulationResults {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    pub hash: String,
}

/// Payload of `/transaction/simulate`: `{data: {result: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSimulationPayload {
    pub result: TransactionSimulationResults,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            nonce: 3,
            value: "1000000000000000000".to_string(),
            receiver: "aa".repeat(32),
            sender: "bb".repeat(32),
            gas_price: 1_000_000_000,
            gas_limit: 50_000,
            data: Some("transfer".to_string()),
            signature: "cc".repeat(64),
            chain_id: "L".to_string(),
            version: 1,
        }
    }

    #[test]
    fn test_transaction_wire_names() {
        let json = serde_json::to_string(&sample_tx()).unwrap();
        assert!(json.contains("\"gasPrice\":1000000000"));
        assert!(json.contains("\"gasLimit\":50000"));
        assert!(json.contains("\"chainID\":\"L\""));
    }

    #[test]
    fn test_transaction_round_trip() {
        let tx = sample_tx();
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }

    #[test]
    fn test_full_transaction_shard_fields() {
        let json = r#"{
            "hash": "h", "nonce": 1, "round": 2, "value": "5",
            "receiver": "r", "sender": "s", "gasPrice": 1, "gasLimit": 2,
            "sourceShard": 0, "destinationShard": 1, "blockNonce": 9,
            "status": "success"
        }"#;
        let tx: FullTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.source_shard, 0);
        assert_eq!(tx.destination_shard, 1);
        assert_eq!(tx.status, "success");
    }
}
