//! # Shared Types Crate
//!
//! Wire-level data model shared by every Lattice Proxy subsystem: observer
//! node descriptors, the response envelope spoken by observers, block and
//! hyperblock structures, transactions, and accounts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a subsystem boundary
//!   lives here.
//! - **Wire Fidelity**: serde attributes pin the exact JSON field names the
//!   observer REST API uses; nothing is renamed in transit.
//! - **Transient Values**: blocks, transactions, and accounts are response
//!   values owned by the requesting operation; nothing here is cached.

#![warn(clippy::all)]

pub mod account;
pub mod address;
pub mod blocks;
pub mod envelope;
pub mod network;
pub mod nodes;
pub mod transaction;

pub use account::{Account, AccountPayload};
pub use address::{decode_address, AddressError, ADDRESS_LEN};
pub use blocks::{
    Block, BlockPayload, Hyperblock, HyperblockPayload, MiniBlock, MiniBlockType, NotarizedBlock,
};
pub use envelope::{ApiResponse, ReturnCode};
pub use network::{NetworkConfig, NetworkConfigPayload, NetworkStatus, NetworkStatusPayload};
pub use nodes::{NodeData, ShardId, METACHAIN_SHARD_ID};
pub use transaction::{
    FullTransaction, SendTransactionPayload, Transaction, TransactionPayload,
    TransactionSimulationPayload, TransactionSimulationResults,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
