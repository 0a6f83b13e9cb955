//! Port traits consumed and exposed by the dispatch engine.

mod outbound;

pub use outbound::{RestClient, RestResponse};
