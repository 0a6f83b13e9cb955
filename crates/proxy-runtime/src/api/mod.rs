//! The REST surface: axum routes relaying the observer envelope.

mod handlers;

use axum::routing::{get, post};
use axum::Router;
use lp_05_facade::ProxyFacade;
use std::sync::Arc;

/// Build the proxy's REST router over the facade.
pub fn router(facade: Arc<ProxyFacade>) -> Router {
    Router::new()
        .route("/address/:address", get(handlers::get_account))
        .route("/transaction/send", post(handlers::send_transaction))
        .route("/transaction/simulate", post(handlers::simulate_transaction))
        .route("/transaction/:hash", get(handlers::get_transaction))
        .route("/block/:shard/by-nonce/:nonce", get(handlers::get_block_by_nonce))
        .route("/block/:shard/by-hash/:hash", get(handlers::get_block_by_hash))
        .route("/hyperblock/by-nonce/:nonce", get(handlers::get_hyperblock_by_nonce))
        .route("/hyperblock/by-hash/:hash", get(handlers::get_hyperblock_by_hash))
        .route("/network/status/:shard", get(handlers::get_network_status))
        .route("/network/config", get(handlers::get_network_config))
        .route("/health", get(handlers::health))
        .with_state(facade)
}
