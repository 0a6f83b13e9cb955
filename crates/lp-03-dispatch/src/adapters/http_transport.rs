//! # HTTP Transport
//!
//! reqwest-backed [`RestClient`] with a per-request timeout. The inner client
//! is built once and reused, so connections are pooled per observer host.

use crate::domain::{DispatchError, RestError};
use crate::ports::{RestClient, RestResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Timeout-bound JSON transport over reqwest.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose every request is bounded by
    /// `request_timeout_sec` seconds. A zero timeout is a configuration
    /// mistake and is rejected.
    pub fn new(request_timeout_sec: u64) -> Result<Self, DispatchError> {
        if request_timeout_sec == 0 {
            return Err(DispatchError::InvalidRequestTimeout);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout_sec))
            .build()
            .map_err(|e| DispatchError::ClientSetup(e.to_string()))?;

        Ok(Self { client })
    }

    fn classify_send_error(url: &str, err: reqwest::Error) -> RestError {
        if err.is_timeout() {
            RestError::Timeout {
                url: url.to_string(),
            }
        } else {
            RestError::Connection {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    async fn read_response(url: &str, response: reqwest::Response) -> Result<RestResponse, RestError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Self::classify_send_error(url, e))?;

        if !(200..300).contains(&status) {
            // Relay the observer's own error message when its body still
            // carries the envelope shape.
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| text.chars().take(256).collect());

            return Err(RestError::Remote { status, message });
        }

        let body = serde_json::from_str(&text).map_err(|e| RestError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(RestResponse { status, body })
    }
}

#[async_trait]
impl RestClient for HttpTransport {
    async fn call_get(&self, base_url: &str, path: &str) -> Result<RestResponse, RestError> {
        let url = format!("{}{}", base_url, path);
        debug!(%url, "[lp-03] GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&url, e))?;

        Self::read_response(&url, response).await
    }

    async fn call_post(
        &self,
        base_url: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RestResponse, RestError> {
        let url = format!("{}{}", base_url, path);
        debug!(%url, "[lp-03] POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Self::classify_send_error(&url, e))?;

        Self::read_response(&url, response).await
    }
}
