//! # LP-03 Dispatch
//!
//! The request-dispatch engine: a timeout-bound HTTP client plus the failover
//! walk that tries a shard's observers until one yields a usable answer.
//!
//! Failure handling draws a hard line between two kinds of errors:
//!
//! - **transient** — the observer never produced a well-formed response
//!   (timeout, connection refused, garbage body). The walk continues with the
//!   next replica.
//! - **definitive** — the observer answered with a well-formed envelope
//!   carrying a domain error ("transaction not found"). Asking another
//!   replica would only repeat the answer, so the walk short-circuits.
//!
//! ## Module Structure
//!
//! ```text
//! lp-03-dispatch/
//! ├── domain/          # DispatchError, RestError, ObserverCallError
//! ├── ports/           # RestClient trait
//! ├── adapters/        # HttpTransport (reqwest)
//! └── dispatcher.rs    # Dispatcher
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
mod dispatcher;
pub mod domain;
pub mod ports;

pub use adapters::HttpTransport;
pub use dispatcher::{Dispatcher, ObserverKind};
pub use domain::{DispatchError, ObserverCallError, RestError};
pub use ports::{RestClient, RestResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
