//! # Dispatcher
//!
//! Walks a shard's rotated observer list until one call succeeds, applying
//! the transient/definitive failure split, and offers the sweep variants the
//! facade operations build on.

use crate::domain::{DispatchError, ObserverCallError, RestError};
use crate::ports::RestClient;
use lp_01_sharding::{ShardCoordinator, ShardError};
use lp_02_observers::{NodesProvider, ObserverError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiResponse, NodeData, ShardId};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Which observer fleet a dispatch targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverKind {
    /// Regular observers serving live state.
    Regular,
    /// Full-history observers retaining all historical state.
    FullHistory,
}

/// The request-dispatch engine.
///
/// Owns the routing collaborators and drives every outbound observer call
/// made by the proxy.
pub struct Dispatcher {
    coordinator: Arc<dyn ShardCoordinator>,
    observers: Arc<dyn NodesProvider>,
    full_history: Arc<dyn NodesProvider>,
    rest: Arc<dyn RestClient>,
}

impl Dispatcher {
    /// Wire a dispatcher from its collaborators.
    pub fn new(
        coordinator: Arc<dyn ShardCoordinator>,
        observers: Arc<dyn NodesProvider>,
        full_history: Arc<dyn NodesProvider>,
        rest: Arc<dyn RestClient>,
    ) -> Self {
        Self {
            coordinator,
            observers,
            full_history,
            rest,
        }
    }

    /// Route an account address to its owning shard.
    pub fn compute_shard_id(&self, address: &[u8]) -> Result<ShardId, ShardError> {
        self.coordinator.compute_shard_id(address)
    }

    /// Every shard id the proxy serves, metachain last.
    pub fn shard_ids(&self) -> Vec<ShardId> {
        self.coordinator.all_shard_ids()
    }

    /// Number of regular shards.
    pub fn num_shards(&self) -> u32 {
        self.coordinator.num_shards()
    }

    /// The rotated observer list for one shard.
    pub fn observers(&self, shard_id: ShardId) -> Result<Vec<NodeData>, DispatchError> {
        Ok(self.provider(ObserverKind::Regular).get_by_shard(shard_id)?)
    }

    /// The rotated full-history observer list for one shard.
    pub fn full_history_observers(&self, shard_id: ShardId) -> Result<Vec<NodeData>, DispatchError> {
        Ok(self
            .provider(ObserverKind::FullHistory)
            .get_by_shard(shard_id)?)
    }

    fn provider(&self, kind: ObserverKind) -> &dyn NodesProvider {
        match kind {
            ObserverKind::Regular => self.observers.as_ref(),
            ObserverKind::FullHistory => self.full_history.as_ref(),
        }
    }

    /// Run `operation` against the shard's observers in rotated order until
    /// one succeeds.
    ///
    /// Transient failures move on to the next replica; a definitive failure
    /// is the shard's answer and short-circuits. When every replica fails
    /// transiently the last failure is surfaced as
    /// [`DispatchError::SendingRequest`].
    pub async fn try_on_shard<T, F, Fut>(
        &self,
        shard_id: ShardId,
        operation: F,
    ) -> Result<T, DispatchError>
    where
        F: Fn(NodeData) -> Fut,
        Fut: Future<Output = Result<T, ObserverCallError>>,
    {
        self.try_on_shard_nodes(ObserverKind::Regular, shard_id, operation)
            .await
    }

    /// [`Self::try_on_shard`] against a chosen observer fleet.
    pub async fn try_on_shard_nodes<T, F, Fut>(
        &self,
        kind: ObserverKind,
        shard_id: ShardId,
        operation: F,
    ) -> Result<T, DispatchError>
    where
        F: Fn(NodeData) -> Fut,
        Fut: Future<Output = Result<T, ObserverCallError>>,
    {
        let observers = self.provider(kind).get_by_shard(shard_id)?;

        let mut last_transient: Option<RestError> = None;
        for observer in observers {
            let address = observer.address.clone();
            match operation(observer).await {
                Ok(result) => {
                    debug!(%address, shard_id, "[lp-03] observer answered");
                    return Ok(result);
                }
                Err(ObserverCallError::Transient(rest)) => {
                    warn!(%address, shard_id, error = %rest, "[lp-03] observer failed, trying next");
                    last_transient = Some(rest);
                }
                Err(ObserverCallError::Definitive { status, message }) => {
                    debug!(%address, shard_id, status, "[lp-03] observer reported domain error");
                    return Err(DispatchError::Remote { status, message });
                }
            }
        }

        Err(DispatchError::SendingRequest {
            shard_id,
            last: last_transient.unwrap_or(RestError::Connection {
                url: String::new(),
                reason: "no observers".to_string(),
            }),
        })
    }

    /// Run `operation` shard by shard over [`Self::shard_ids`] until one
    /// shard yields a success.
    ///
    /// Shards without observers are logged and skipped, never aborting the
    /// sweep; a shard's definitive failure (e.g. "not found") also moves the
    /// sweep on, because another shard may hold the answer. The last failure
    /// is surfaced when no shard succeeds.
    pub async fn try_on_all_shards<T, F, Fut>(&self, operation: F) -> Result<T, DispatchError>
    where
        F: Fn(NodeData) -> Fut,
        Fut: Future<Output = Result<T, ObserverCallError>>,
    {
        self.try_on_all_shards_nodes(ObserverKind::Regular, operation)
            .await
    }

    /// [`Self::try_on_all_shards`] against a chosen observer fleet.
    pub async fn try_on_all_shards_nodes<T, F, Fut>(
        &self,
        kind: ObserverKind,
        operation: F,
    ) -> Result<T, DispatchError>
    where
        F: Fn(NodeData) -> Fut,
        Fut: Future<Output = Result<T, ObserverCallError>>,
    {
        let mut last_err: Option<DispatchError> = None;

        for shard_id in self.shard_ids() {
            match self.try_on_shard_nodes(kind, shard_id, &operation).await {
                Ok(result) => return Ok(result),
                Err(DispatchError::Observers(ObserverError::ShardNotAvailable(_))) => {
                    warn!(shard_id, "[lp-03] no observers for shard, sweep continues");
                }
                Err(err) => {
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or(DispatchError::Observers(ObserverError::EmptyObserversList)))
    }

    /// One observer per shard: the head of each shard's rotated list, used to
    /// pick leaders for sweep-style operations. Shards with no observers are
    /// silently omitted.
    pub fn get_observers_one_per_shard(&self, kind: ObserverKind) -> Vec<NodeData> {
        let mut leaders = Vec::new();

        for shard_id in self.shard_ids() {
            match self.provider(kind).get_by_shard(shard_id) {
                Ok(observers) => {
                    if let Some(first) = observers.into_iter().next() {
                        leaders.push(first);
                    }
                }
                Err(_) => {
                    debug!(shard_id, "[lp-03] shard has no observers, omitted");
                }
            }
        }

        leaders
    }

    /// Typed GET of an enveloped payload from one observer, classified for
    /// the failover walk.
    pub async fn observer_get<T: DeserializeOwned>(
        &self,
        observer: &NodeData,
        path: &str,
    ) -> Result<T, ObserverCallError> {
        let response = self
            .rest
            .call_get(&observer.address, path)
            .await
            .map_err(classify_rest_error)?;

        decode_envelope(&observer.address, path, response.status, response.body)
    }

    /// Typed POST of an enveloped payload to one observer.
    pub async fn observer_post<T: DeserializeOwned, B: Serialize>(
        &self,
        observer: &NodeData,
        path: &str,
        body: &B,
    ) -> Result<T, ObserverCallError> {
        let body = serde_json::to_value(body).map_err(|e| {
            ObserverCallError::Transient(RestError::Decode {
                url: format!("{}{}", observer.address, path),
                reason: e.to_string(),
            })
        })?;

        let response = self
            .rest
            .call_post(&observer.address, path, &body)
            .await
            .map_err(classify_rest_error)?;

        decode_envelope(&observer.address, path, response.status, response.body)
    }
}

/// Transport failures that produced a well-formed remote answer are
/// definitive; everything else may succeed on the next replica.
fn classify_rest_error(err: RestError) -> ObserverCallError {
    match err {
        RestError::Remote { status, message } => ObserverCallError::Definitive { status, message },
        other => ObserverCallError::Transient(other),
    }
}

fn decode_envelope<T: DeserializeOwned>(
    base_url: &str,
    path: &str,
    status: u16,
    body: serde_json::Value,
) -> Result<T, ObserverCallError> {
    let envelope: ApiResponse<T> = serde_json::from_value(body).map_err(|e| {
        ObserverCallError::Transient(RestError::Decode {
            url: format!("{}{}", base_url, path),
            reason: e.to_string(),
        })
    })?;

    if !envelope.is_successful() {
        return Err(ObserverCallError::Definitive {
            status,
            message: envelope.error,
        });
    }

    envelope.data.ok_or_else(|| {
        ObserverCallError::Transient(RestError::Decode {
            url: format!("{}{}", base_url, path),
            reason: "successful envelope without data".to_string(),
        })
    })
}
