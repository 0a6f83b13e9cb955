//! # Proxy Flow Scenarios
//!
//! End-to-end scenarios over the real wiring: configuration → pools →
//! dispatcher → facade, talking HTTP to [`crate::mock_observer`] instances.

use lp_05_facade::ProxyFacade;
use proxy_runtime::{build_facade, GeneralSettings, ProxyConfig};
use shared_types::{NodeData, ADDRESS_LEN};
use std::sync::Arc;

/// Build a facade over the given observer fleet, with real HTTP transport.
pub fn facade_over(
    num_shards: u32,
    request_timeout_sec: u64,
    observers: Vec<NodeData>,
) -> Arc<ProxyFacade> {
    let config = ProxyConfig {
        general: GeneralSettings {
            num_shards,
            request_timeout_sec,
            ..GeneralSettings::default()
        },
        observers,
        full_history_nodes: Vec::new(),
    };

    build_facade(&config).expect("test configuration must wire")
}

/// A 32-byte hex address whose last byte pins the owning shard.
pub fn hex_address(last: u8) -> String {
    let mut bytes = vec![0xcd_u8; ADDRESS_LEN - 1];
    bytes.push(last);
    hex::encode(bytes)
}
