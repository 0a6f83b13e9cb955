//! # Transaction Hash
//!
//! The deterministic transaction identifier: Keccak-256 over the canonical
//! JSON serialization of the transaction. Canonical means the struct's own
//! field order, so the hash is independent of how the caller ordered fields
//! in the submitted encoding, and no network round-trip is involved.

use crate::domain::ProxyError;
use sha3::{Digest, Keccak256};
use shared_types::Transaction;

/// Compute the canonical hash of a transaction, hex-encoded.
pub fn compute_transaction_hash(tx: &Transaction) -> Result<String, ProxyError> {
    let canonical =
        serde_json::to_vec(tx).map_err(|e| ProxyError::Serialization(e.to_string()))?;

    Ok(hex::encode(keccak256(&canonical)))
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            nonce: 7,
            value: "1000".to_string(),
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
    fn test_hash_is_deterministic() {
        let tx = sample_tx();
        assert_eq!(
            compute_transaction_hash(&tx).unwrap(),
            compute_transaction_hash(&tx).unwrap()
        );
    }

    #[test]
    fn test_hash_is_hex_of_32_bytes() {
        let hash = compute_transaction_hash(&sample_tx()).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_changes_with_any_field() {
        let base = compute_transaction_hash(&sample_tx()).unwrap();

        let mut tx = sample_tx();
        tx.nonce += 1;
        assert_ne!(base, compute_transaction_hash(&tx).unwrap());

        let mut tx = sample_tx();
        tx.value = "1001".to_string();
        assert_ne!(base, compute_transaction_hash(&tx).unwrap());
    }

    #[test]
    fn test_hash_independent_of_input_field_order() {
        let tx = sample_tx();
        let json = serde_json::to_string(&tx).unwrap();

        // Re-encode through a map, which scrambles field order.
        let scrambled: serde_json::Value = serde_json::from_str(&json).unwrap();
        let reparsed: Transaction = serde_json::from_value(scrambled).unwrap();

        assert_eq!(
            compute_transaction_hash(&tx).unwrap(),
            compute_transaction_hash(&reparsed).unwrap()
        );
    }
}
