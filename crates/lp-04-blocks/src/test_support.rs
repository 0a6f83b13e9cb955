//! Scripted collaborators for this crate's tests.

use async_trait::async_trait;
use lp_01_sharding::AddressShardCoordinator;
use lp_02_observers::CircularQueuePool;
use lp_03_dispatch::{Dispatcher, RestClient, RestError, RestResponse};
use shared_types::{ApiResponse, NodeData};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// RestClient stub scripted per full `{base_url}{path}` key. Unscripted URLs
/// answer with a connection failure.
pub(crate) struct ScriptedRest {
    responses: Mutex<HashMap<String, Result<RestResponse, RestError>>>,
}

impl ScriptedRest {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn on(self, url: &str, response: Result<RestResponse, RestError>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
        self
    }

    /// Script a 200 envelope around `payload` at `url`.
    pub(crate) fn on_ok<T: serde::Serialize>(self, url: &str, payload: T) -> Self {
        let body = serde_json::to_value(ApiResponse::success(payload)).unwrap();
        self.on(url, Ok(RestResponse { status: 200, body }))
    }

    /// Script a connection failure at `url`.
    pub(crate) fn on_refused(self, url: &str) -> Self {
        self.on(
            url,
            Err(RestError::Connection {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            }),
        )
    }
}

#[async_trait]
impl RestClient for ScriptedRest {
    async fn call_get(&self, base_url: &str, path: &str) -> Result<RestResponse, RestError> {
        let key = format!("{}{}", base_url, path);
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or(Err(RestError::Connection {
                url: key,
                reason: "unscripted".to_string(),
            }))
    }

    async fn call_post(
        &self,
        base_url: &str,
        path: &str,
        _body: &serde_json::Value,
    ) -> Result<RestResponse, RestError> {
        self.call_get(base_url, path).await
    }
}

/// A dispatcher over real pools and a real coordinator, with scripted HTTP.
pub(crate) fn dispatcher_with(
    num_shards: u32,
    observers: Vec<NodeData>,
    rest: ScriptedRest,
) -> Arc<Dispatcher> {
    let pool = Arc::new(CircularQueuePool::new(observers.clone()).unwrap());
    let full_history = Arc::new(CircularQueuePool::new(observers).unwrap());
    Arc::new(Dispatcher::new(
        Arc::new(AddressShardCoordinator::new(num_shards).unwrap()),
        pool,
        full_history,
        Arc::new(rest),
    ))
}
