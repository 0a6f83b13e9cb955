//! Error types for HTTP transport and observer dispatch.

use lp_02_observers::ObserverError;
use shared_types::ShardId;
use thiserror::Error;

/// Transport-level failures: the observer never produced a usable 2xx
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Full request URL.
        url: String,
    },

    /// The connection could not be established or broke mid-flight.
    #[error("connection to {url} failed: {reason}")]
    Connection {
        /// Full request URL.
        url: String,
        /// Transport-layer failure description.
        reason: String,
    },

    /// The response body was not the JSON shape the caller expected.
    #[error("malformed response from {url}: {reason}")]
    Decode {
        /// Full request URL.
        url: String,
        /// Decoder failure description.
        reason: String,
    },

    /// The observer answered with a non-2xx status.
    #[error("observer returned status {status}: {message}")]
    Remote {
        /// HTTP status returned by the observer.
        status: u16,
        /// Error message decoded from the observer's envelope, when present.
        message: String,
    },
}

impl RestError {
    /// The HTTP status the outer handler should relay for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Timeout { .. } => 408,
            Self::Connection { .. } | Self::Decode { .. } => 502,
            Self::Remote { status, .. } => *status,
        }
    }
}

/// Outcome classification for one observer call, as consumed by the failover
/// walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverCallError {
    /// The observer never answered usefully; the next replica may.
    #[error(transparent)]
    Transient(RestError),

    /// The observer answered with a well-formed domain error; every replica
    /// would answer the same.
    #[error("observer reported: {message} (status {status})")]
    Definitive {
        /// HTTP status carried by the envelope.
        status: u16,
        /// The envelope's error message.
        message: String,
    },
}

/// Dispatch-level failures surfaced to the facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The transport cannot be built with a zero request timeout.
    #[error("invalid request timeout")]
    InvalidRequestTimeout,

    /// The underlying HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    ClientSetup(String),

    /// Observer pool lookup failed.
    #[error(transparent)]
    Observers(#[from] ObserverError),

    /// Every observer of the shard failed transiently.
    #[error("sending request to all observers of shard {shard_id} failed: {last}")]
    SendingRequest {
        /// The shard whose observers were exhausted.
        shard_id: ShardId,
        /// The last transient failure seen.
        last: RestError,
    },

    /// An observer returned a well-formed domain error.
    #[error("{message}")]
    Remote {
        /// HTTP status to relay.
        status: u16,
        /// The observer's error message.
        message: String,
    },
}

impl DispatchError {
    /// The HTTP status the outer handler should relay for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequestTimeout | Self::ClientSetup(_) => 500,
            Self::Observers(ObserverError::EmptyObserversList) => 500,
            Self::Observers(ObserverError::ShardNotAvailable(_)) => 400,
            Self::SendingRequest { last, .. } => match last {
                RestError::Timeout { .. } => 408,
                _ => 502,
            },
            Self::Remote { status, .. } => *status,
        }
    }
}
