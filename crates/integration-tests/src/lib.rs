//! # Integration Tests Crate
//!
//! Cross-crate scenarios exercising the whole proxy — pools, dispatch,
//! providers, facade, REST surface — against in-process mock observers.
//!
//! ## Structure
//!
//! ```text
//! integration-tests/
//! └── src/
//!     ├── lib.rs           # This file
//!     ├── mock_observer.rs # Scriptable in-process observer (axum)
//!     └── proxy_flows.rs   # End-to-end scenarios
//! ```
//!
//! ## Scenarios (proxy_flows.rs)
//!
//! - Failover: a dead replica is skipped, the healthy one answers.
//! - Timeout: a slow observer surfaces as 408 without hanging the caller.
//! - Rotation: consecutive requests start at different replicas.
//! - Hyperblock: a metachain block joined with its notarized shard blocks.
//! - Synchronization anchor: minimum final nonce across metachain observers.
//! - REST surface: the envelope relayed end to end over real HTTP.

pub mod mock_observer;
pub mod proxy_flows;
