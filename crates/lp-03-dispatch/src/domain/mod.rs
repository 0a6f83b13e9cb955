//! Domain types for the dispatch engine.

mod errors;

pub use errors::{DispatchError, ObserverCallError, RestError};
