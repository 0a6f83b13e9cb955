//! # Mock Observer
//!
//! A scriptable in-process observer node: an axum server bound to an
//! ephemeral port, answering the observer REST API from in-memory state and
//! recording every request path it serves.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use shared_types::{
    Account, AccountPayload, ApiResponse, Block, BlockPayload, NetworkStatus,
    NetworkStatusPayload, ReturnCode, SendTransactionPayload,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Scriptable observer state shared with the serving task.
#[derive(Default)]
pub struct ObserverState {
    /// Accounts by hex address.
    pub accounts: Mutex<HashMap<String, Account>>,
    /// Blocks by nonce.
    pub blocks_by_nonce: Mutex<HashMap<u64, Block>>,
    /// Blocks by hash.
    pub blocks_by_hash: Mutex<HashMap<String, Block>>,
    /// Status metrics, when this observer reports any.
    pub status: Mutex<Option<NetworkStatus>>,
    /// Hash answered to `/transaction/send`.
    pub tx_hash: Mutex<String>,
    /// Artificial latency applied to every request.
    pub delay: Mutex<Duration>,
    /// Every request path served, in order.
    pub hits: Mutex<Vec<String>>,
}

impl ObserverState {
    fn record(&self, path: &str) {
        self.hits.lock().push(path.to_string());
    }

    async fn apply_delay(&self) {
        let delay = *self.delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// A running mock observer.
pub struct MockObserver {
    /// Bound address of the server.
    pub addr: SocketAddr,
    /// Shared scriptable state.
    pub state: Arc<ObserverState>,
}

impl MockObserver {
    /// Spawn a mock observer on an ephemeral local port.
    pub async fn spawn() -> Self {
        let state = Arc::new(ObserverState::default());

        let router = Router::new()
            .route("/address/:address", get(get_account))
            .route("/block/by-nonce/:nonce", get(get_block_by_nonce))
            .route("/block/by-hash/:hash", get(get_block_by_hash))
            .route("/node/status", get(get_status))
            .route("/transaction/send", post(send_transaction))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL usable as a `NodeData` address.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Script an account.
    pub fn with_account(&self, account: Account) {
        self.state
            .accounts
            .lock()
            .insert(account.address.clone(), account);
    }

    /// Script a block under both its nonce and its hash.
    pub fn with_block(&self, block: Block) {
        self.state
            .blocks_by_hash
            .lock()
            .insert(block.hash.clone(), block.clone());
        self.state.blocks_by_nonce.lock().insert(block.nonce, block);
    }

    /// Script the status metrics.
    pub fn with_status(&self, status: NetworkStatus) {
        *self.state.status.lock() = Some(status);
    }

    /// Apply artificial latency to every response.
    pub fn with_delay(&self, delay: Duration) {
        *self.state.delay.lock() = delay;
    }

    /// Request paths served so far.
    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().clone()
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::failure(message, ReturnCode::RequestError)),
    )
        .into_response()
}

async fn get_account(
    State(state): State<Arc<ObserverState>>,
    Path(address): Path<String>,
) -> Response {
    state.record(&format!("/address/{}", address));
    state.apply_delay().await;

    match state.accounts.lock().get(&address).cloned() {
        Some(account) => Json(ApiResponse::success(AccountPayload { account })).into_response(),
        None => not_found("account not found"),
    }
}

async fn get_block_by_nonce(
    State(state): State<Arc<ObserverState>>,
    Path(nonce): Path<u64>,
) -> Response {
    state.record(&format!("/block/by-nonce/{}", nonce));
    state.apply_delay().await;

    match state.blocks_by_nonce.lock().get(&nonce).cloned() {
        Some(block) => Json(ApiResponse::success(BlockPayload { block })).into_response(),
        None => not_found("block not found"),
    }
}

async fn get_block_by_hash(
    State(state): State<Arc<ObserverState>>,
    Path(hash): Path<String>,
) -> Response {
    state.record(&format!("/block/by-hash/{}", hash));
    state.apply_delay().await;

    match state.blocks_by_hash.lock().get(&hash).cloned() {
        Some(block) => Json(ApiResponse::success(BlockPayload { block })).into_response(),
        None => not_found("block not found"),
    }
}

async fn get_status(State(state): State<Arc<ObserverState>>) -> Response {
    state.record("/node/status");
    state.apply_delay().await;

    match state.status.lock().clone() {
        Some(metrics) => {
            Json(ApiResponse::success(NetworkStatusPayload { metrics })).into_response()
        }
        None => not_found("status not available"),
    }
}

async fn send_transaction(
    State(state): State<Arc<ObserverState>>,
    Json(_body): Json<serde_json::Value>,
) -> Response {
    state.record("/transaction/send");
    state.apply_delay().await;

    let tx_hash = state.tx_hash.lock().clone();
    Json(ApiResponse::success(SendTransactionPayload { tx_hash })).into_response()
}
