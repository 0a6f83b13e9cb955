//! # LP-02 Observers
//!
//! Shard-indexed rotating pools of observer nodes.
//!
//! Every dispatch asks a pool for the observers of one shard; the pool
//! answers with the full replica list rotated by one position per call, so
//! consecutive callers start their failover walk at different replicas and
//! load spreads without any caller-side bookkeeping.
//!
//! Two independent pool instances are wired at startup: one for regular
//! observers and one for full-history observers (archive nodes that retain
//! all historical state).
//!
//! ## Module Structure
//!
//! ```text
//! lp-02-observers/
//! ├── domain/          # ObserverError
//! ├── ports/           # NodesProvider trait
//! └── adapters/        # CircularQueuePool
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::CircularQueuePool;
pub use domain::ObserverError;
pub use ports::NodesProvider;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
