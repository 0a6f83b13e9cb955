//! The top-level error the facade surfaces to the REST layer.

use lp_01_sharding::ShardError;
use lp_03_dispatch::DispatchError;
use lp_04_blocks::BlockError;
use shared_types::AddressError;
use thiserror::Error;

/// Facade error: everything an operation can report upward.
///
/// [`ProxyError::http_status`] is the status the outer handler relays, so
/// every layer below only attaches context and never remaps codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// The client-supplied address does not decode.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Shard routing failed.
    #[error(transparent)]
    Shard(#[from] ShardError),

    /// Observer dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Block or hyperblock read failed.
    #[error(transparent)]
    Blocks(#[from] BlockError),

    /// A value could not be serialized into its canonical form.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ProxyError {
    /// The HTTP status the outer handler should relay for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Address(_) | Self::Shard(_) => 400,
            Self::Dispatch(inner) => inner.http_status(),
            Self::Blocks(inner) => inner.http_status(),
            Self::Serialization(_) => 500,
        }
    }
}
