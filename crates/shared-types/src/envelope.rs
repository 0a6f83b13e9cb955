//! The response envelope spoken by every observer endpoint.
//!
//! All observer responses share the shape `{data, error, code}`. A non-empty
//! `error` with a code other than `successful` is a domain failure, as
//! opposed to a transport failure which never produces an envelope at all.

use serde::{Deserialize, Serialize};

/// Observer return code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReturnCode {
    /// Request processed successfully.
    #[default]
    #[serde(rename = "successful")]
    Success,
    /// The observer failed internally.
    #[serde(rename = "internal_issue")]
    InternalError,
    /// The request itself was malformed or unserviceable.
    #[serde(rename = "bad_request")]
    RequestError,
}

/// Generic observer response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Payload, absent on failure.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable error, empty on success.
    #[serde(default)]
    pub error: String,
    /// Machine-readable return code.
    #[serde(default)]
    pub code: ReturnCode,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a successful envelope.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: String::new(),
            code: ReturnCode::Success,
        }
    }

    /// Build a failed envelope with no payload.
    pub fn failure(error: impl Into<String>, code: ReturnCode) -> Self {
        Self {
            data: None,
            error: error.into(),
            code,
        }
    }

    /// True when the envelope carries a successful result.
    pub fn is_successful(&self) -> bool {
        self.code == ReturnCode::Success
    }
}
