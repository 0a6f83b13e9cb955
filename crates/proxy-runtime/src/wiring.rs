//! Collaborator wiring: configuration in, facade out.

use crate::config::{ConfigError, ProxyConfig};
use lp_01_sharding::{AddressShardCoordinator, ShardError};
use lp_02_observers::{CircularQueuePool, ObserverError};
use lp_03_dispatch::{DispatchError, Dispatcher, HttpTransport};
use lp_05_facade::ProxyFacade;
use std::sync::Arc;
use tracing::info;

/// Failures while turning configuration into a running proxy.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shard coordinator rejected the shard count.
    #[error(transparent)]
    Shard(#[from] ShardError),

    /// Observer pools rejected the fleet.
    #[error(transparent)]
    Observers(#[from] ObserverError),

    /// HTTP transport rejected its parameters.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Build the facade from a validated configuration.
pub fn build_facade(config: &ProxyConfig) -> Result<Arc<ProxyFacade>, BootstrapError> {
    config.validate()?;

    let coordinator = Arc::new(AddressShardCoordinator::new(config.general.num_shards)?);
    let observers = Arc::new(CircularQueuePool::new(config.observers.clone())?);

    let full_history_fleet = if config.full_history_nodes.is_empty() {
        info!("[runtime] no full-history nodes configured, regular observers serve history");
        config.observers.clone()
    } else {
        config.full_history_nodes.clone()
    };
    let full_history = Arc::new(CircularQueuePool::new(full_history_fleet)?);

    let transport = Arc::new(HttpTransport::new(config.general.request_timeout_sec)?);

    let dispatcher = Arc::new(Dispatcher::new(
        coordinator,
        observers,
        full_history,
        transport,
    ));

    info!(
        num_shards = config.general.num_shards,
        observers = config.observers.len(),
        full_history_nodes = config.full_history_nodes.len(),
        "[runtime] proxy wired"
    );

    Ok(Arc::new(ProxyFacade::new(dispatcher)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::NodeData;

    fn valid_config() -> ProxyConfig {
        ProxyConfig {
            observers: vec![
                NodeData::new("http://10.0.0.5:8080", 0),
                NodeData::new("http://10.0.0.6:8080", u32::MAX),
            ],
            ..ProxyConfig::default()
        }
    }

    #[test]
    fn test_build_facade_from_valid_config() {
        assert!(build_facade(&valid_config()).is_ok());
    }

    #[test]
    fn test_build_facade_rejects_invalid_config() {
        let mut config = valid_config();
        config.general.request_timeout_sec = 0;
        assert!(matches!(
            build_facade(&config),
            Err(BootstrapError::Config(_))
        ));
    }

    #[test]
    fn test_build_facade_rejects_empty_observers() {
        let mut config = valid_config();
        config.observers.clear();
        // Caught by validation before the pools are even built.
        assert!(build_facade(&config).is_err());
    }
}
