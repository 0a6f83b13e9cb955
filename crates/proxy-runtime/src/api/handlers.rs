//! Route handlers: thin relays from HTTP to the facade.
//!
//! Responses reuse the same `{data, error, code}` envelope the observers
//! speak, so clients see one response shape end to end.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lp_05_facade::{ProxyError, ProxyFacade};
use serde::{Deserialize, Serialize};
use shared_types::{
    AccountPayload, ApiResponse, BlockPayload, HyperblockPayload, NetworkConfigPayload,
    NetworkStatusPayload, ReturnCode, SendTransactionPayload, ShardId, Transaction,
    TransactionPayload, TransactionSimulationPayload,
};
use std::sync::Arc;

fn ok_response<T: Serialize>(payload: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(payload))).into_response()
}

fn error_response(err: ProxyError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let code = if status.is_client_error() {
        ReturnCode::RequestError
    } else {
        ReturnCode::InternalError
    };

    (
        status,
        Json(ApiResponse::<()>::failure(err.to_string(), code)),
    )
        .into_response()
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

pub(crate) async fn get_account(
    State(facade): State<Arc<ProxyFacade>>,
    Path(address): Path<String>,
) -> Response {
    match facade.get_account(&address).await {
        Ok(account) => ok_response(AccountPayload { account }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn send_transaction(
    State(facade): State<Arc<ProxyFacade>>,
    Json(tx): Json<Transaction>,
) -> Response {
    match facade.send_transaction(&tx).await {
        Ok(tx_hash) => ok_response(SendTransactionPayload { tx_hash }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn simulate_transaction(
    State(facade): State<Arc<ProxyFacade>>,
    Json(tx): Json<Transaction>,
) -> Response {
    match facade.simulate_transaction(&tx).await {
        Ok(result) => ok_response(TransactionSimulationPayload { result }),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub(crate) struct SenderQuery {
    sender: Option<String>,
}

pub(crate) async fn get_transaction(
    State(facade): State<Arc<ProxyFacade>>,
    Path(hash): Path<String>,
    Query(query): Query<SenderQuery>,
) -> Response {
    match facade
        .get_transaction_by_hash(&hash, query.sender.as_deref())
        .await
    {
        Ok(transaction) => ok_response(TransactionPayload { transaction }),
        Err(err) => error_response(err),
    }
}

#[derive(Deserialize)]
pub(crate) struct WithTxsQuery {
    #[serde(default, rename = "withTxs")]
    with_txs: bool,
}

pub(crate) async fn get_block_by_nonce(
    State(facade): State<Arc<ProxyFacade>>,
    Path((shard, nonce)): Path<(ShardId, u64)>,
    Query(query): Query<WithTxsQuery>,
) -> Response {
    match facade.get_block_by_nonce(shard, nonce, query.with_txs).await {
        Ok(block) => ok_response(BlockPayload { block }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_block_by_hash(
    State(facade): State<Arc<ProxyFacade>>,
    Path((shard, hash)): Path<(ShardId, String)>,
    Query(query): Query<WithTxsQuery>,
) -> Response {
    match facade.get_block_by_hash(shard, &hash, query.with_txs).await {
        Ok(block) => ok_response(BlockPayload { block }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_hyperblock_by_nonce(
    State(facade): State<Arc<ProxyFacade>>,
    Path(nonce): Path<u64>,
) -> Response {
    match facade.get_hyperblock_by_nonce(nonce).await {
        Ok(hyperblock) => ok_response(HyperblockPayload { hyperblock }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_hyperblock_by_hash(
    State(facade): State<Arc<ProxyFacade>>,
    Path(hash): Path<String>,
) -> Response {
    match facade.get_hyperblock_by_hash(&hash).await {
        Ok(hyperblock) => ok_response(HyperblockPayload { hyperblock }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_network_status(
    State(facade): State<Arc<ProxyFacade>>,
    Path(shard): Path<ShardId>,
) -> Response {
    match facade.get_network_status(shard).await {
        Ok(metrics) => ok_response(NetworkStatusPayload { metrics }),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_network_config(State(facade): State<Arc<ProxyFacade>>) -> Response {
    match facade.get_network_config().await {
        Ok(config) => ok_response(NetworkConfigPayload { config }),
        Err(err) => error_response(err),
    }
}
