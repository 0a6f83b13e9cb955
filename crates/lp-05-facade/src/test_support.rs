//! Scripted collaborators for this crate's tests.

use async_trait::async_trait;
use lp_01_sharding::AddressShardCoordinator;
use lp_02_observers::CircularQueuePool;
use lp_03_dispatch::{Dispatcher, RestClient, RestError, RestResponse};
use shared_types::{ApiResponse, NodeData, ADDRESS_LEN};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A 32-byte hex address whose last byte is `last`, fixing its shard.
pub(crate) fn shard_address(last: u8) -> String {
    let mut bytes = vec![0xab_u8; ADDRESS_LEN - 1];
    bytes.push(last);
    hex::encode(bytes)
}

/// RestClient stub scripted per full `{base_url}{path}` key, recording POST
/// bodies for assertions.
pub(crate) struct ScriptedRest {
    responses: Mutex<HashMap<String, Result<RestResponse, RestError>>>,
    posts: Mutex<Vec<(String, serde_json::Value)>>,
}

impl ScriptedRest {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    /// Script a 200 envelope around `payload` at `url`.
    pub(crate) fn on_ok<T: serde::Serialize>(self, url: &str, payload: T) -> Self {
        let body = serde_json::to_value(ApiResponse::success(payload)).unwrap();
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(RestResponse { status: 200, body }));
        self
    }

    /// Script a definitive envelope error at `url`.
    pub(crate) fn on_not_found(self, url: &str, message: &str) -> Self {
        self.responses.lock().unwrap().insert(
            url.to_string(),
            Err(RestError::Remote {
                status: 404,
                message: message.to_string(),
            }),
        );
        self
    }

    /// Bodies seen by `call_post`, in order.
    pub(crate) fn recorded_posts(&self) -> Vec<(String, serde_json::Value)> {
        self.posts.lock().unwrap().clone()
    }

    fn lookup(&self, key: String) -> Result<RestResponse, RestError> {
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
}

#[async_trait]
impl RestClient for ScriptedRest {
    async fn call_get(&self, base_url: &str, path: &str) -> Result<RestResponse, RestError> {
        self.lookup(format!("{}{}", base_url, path))
    }

    async fn call_post(
        &self,
        base_url: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RestResponse, RestError> {
        let key = format!("{}{}", base_url, path);
        self.posts.lock().unwrap().push((key.clone(), body.clone()));
        self.lookup(key)
    }
}

/// A dispatcher over real pools and a real coordinator, with scripted HTTP.
pub(crate) fn dispatcher_with(
    num_shards: u32,
    observers: Vec<NodeData>,
    rest: ScriptedRest,
) -> Arc<Dispatcher> {
    dispatcher_with_shared(num_shards, observers, Arc::new(rest))
}

/// Variant keeping the stub handle for post-call assertions.
pub(crate) fn dispatcher_with_shared(
    num_shards: u32,
    observers: Vec<NodeData>,
    rest: Arc<ScriptedRest>,
) -> Arc<Dispatcher> {
    let pool = Arc::new(CircularQueuePool::new(observers.clone()).unwrap());
    let full_history = Arc::new(CircularQueuePool::new(observers).unwrap());
    Arc::new(Dispatcher::new(
        Arc::new(AddressShardCoordinator::new(num_shards).unwrap()),
        pool,
        full_history,
        rest,
    ))
}

/// Variant with a full-history fleet distinct from the live observers.
pub(crate) fn dispatcher_with_history(
    num_shards: u32,
    observers: Vec<NodeData>,
    full_history_nodes: Vec<NodeData>,
    rest: ScriptedRest,
) -> Arc<Dispatcher> {
    let pool = Arc::new(CircularQueuePool::new(observers).unwrap());
    let full_history = Arc::new(CircularQueuePool::new(full_history_nodes).unwrap());
    Arc::new(Dispatcher::new(
        Arc::new(AddressShardCoordinator::new(num_shards).unwrap()),
        pool,
        full_history,
        Arc::new(rest),
    ))
}
