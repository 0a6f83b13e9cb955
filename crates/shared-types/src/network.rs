//! Network status and configuration metrics exposed by observers.

use serde::{Deserialize, Serialize};

/// Per-shard chain progress metrics from `GET /node/status`.
///
/// `highest_final_nonce` is the key input to hyperblock synchronization: a
/// hyperblock at a nonce at or below the minimum of this value across all
/// metachain observers is guaranteed fully notarized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub nonce: u64,
    pub current_round: u64,
    pub highest_final_nonce: u64,
    pub epoch_number: u32,
}

/// Payload of `/node/status`: `{data: {metrics: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatusPayload {
    pub metrics: NetworkStatus,
}

/// Chain-wide constants from `GET /network/config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub num_shards_without_meta: u32,
    pub min_gas_price: u64,
    pub min_gas_limit: u64,
    pub round_duration_millis: u64,
    pub min_transaction_version: u32,
}

/// Payload of `/network/config`: `{data: {config: …}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfigPayload {
    pub config: NetworkConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let status = NetworkStatus {
            nonce: 10,
            current_round: 11,
            highest_final_nonce: 8,
            epoch_number: 1,
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"highestFinalNonce\":8"));
        assert!(json.contains("\"currentRound\":11"));
    }

    #[test]
    fn test_config_payload_round_trip() {
        let json = r#"{"config": {
            "chainID": "L", "numShardsWithoutMeta": 3, "minGasPrice": 1000000000,
            "minGasLimit": 50000, "roundDurationMillis": 6000, "minTransactionVersion": 1
        }}"#;
        let payload: NetworkConfigPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.config.num_shards_without_meta, 3);
        assert_eq!(payload.config.chain_id, "L");
    }
}
