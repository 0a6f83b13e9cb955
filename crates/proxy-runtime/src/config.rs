//! Proxy configuration with validation, loaded from TOML.
//!
//! ```toml
//! [general]
//! num_shards = 3
//! request_timeout_sec = 10
//! rest_api_port = 8079
//!
//! [[observers]]
//! address = "http://10.0.0.5:8080"
//! shard_id = 0
//!
//! [[full_history_nodes]]
//! address = "http://10.0.0.9:8080"
//! shard_id = 0
//! ```

use serde::{Deserialize, Serialize};
use shared_types::NodeData;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use thiserror::Error;

/// Complete proxy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Runtime parameters.
    pub general: GeneralSettings,
    /// Regular observers, per shard.
    pub observers: Vec<NodeData>,
    /// Archive observers for historical queries. When empty, the regular
    /// observers also serve history.
    pub full_history_nodes: Vec<NodeData>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            observers: Vec::new(),
            full_history_nodes: Vec::new(),
        }
    }
}

/// Runtime parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Number of regular shards (the metachain not counted).
    pub num_shards: u32,
    /// Per-request observer timeout, in seconds.
    pub request_timeout_sec: u64,
    /// Bind address of the REST API.
    pub rest_api_host: IpAddr,
    /// Port of the REST API.
    pub rest_api_port: u16,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            num_shards: 3,
            request_timeout_sec: 10,
            rest_api_host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            rest_api_port: 8079,
        }
    }
}

impl ProxyConfig {
    /// Load and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        Ok(toml::from_str(&contents)?)
    }

    /// Validate configuration before wiring.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.num_shards == 0 {
            return Err(ConfigError::Invalid("num_shards cannot be 0".into()));
        }

        if self.general.request_timeout_sec == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_sec cannot be 0".into(),
            ));
        }

        if self.observers.is_empty() {
            return Err(ConfigError::Invalid("no observers configured".into()));
        }

        Ok(())
    }

    /// REST API bind address.
    pub fn rest_api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.general.rest_api_host, self.general.rest_api_port)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file: {0}")]
    Io(String),

    /// The file is not valid TOML for this schema.
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed values do not make a runnable proxy.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
