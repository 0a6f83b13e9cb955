//! Outbound port: the HTTP transport the dispatcher drives.

use crate::domain::RestError;
use async_trait::async_trait;

/// A successful (2xx) observer response before typed decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw JSON body.
    pub body: serde_json::Value,
}

/// Timeout-bound JSON transport to a single observer.
///
/// One outbound HTTP request per call; no caching, no retries at this layer.
/// Tests supply alternative implementations to script observer behavior.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// `GET {base_url}{path}`, JSON-decoded.
    async fn call_get(&self, base_url: &str, path: &str) -> Result<RestResponse, RestError>;

    /// `POST {base_url}{path}` with a JSON body, JSON-decoded.
    async fn call_post(
        &self,
        base_url: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RestResponse, RestError>;
}
