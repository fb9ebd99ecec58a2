//! JSON bodies of the `/api/config` endpoints.
//!
//! ```text
//! GET  /api/config  →  ChatConfig snapshot
//! POST /api/config  ←  {"field": "group_list", "value": ["111", 222]}
//!                   →  {"success": true, "message": "...", "config": {...}}
//!                   →  {"success": false, "error": "..."}
//! ```
//!
//! The POST body is parsed by hand from raw bytes instead of through a typed
//! `Deserialize` struct: `value` is deliberately untyped (the store decides
//! what is acceptable per field), and every malformed body must produce the
//! same `{"success": false, ...}` shape rather than a framework rejection.

use chatcfg_core::ChatConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a POST body could not be turned into an [`UpdateRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid JSON body")]
    MalformedJson,

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing field or value parameter")]
    MissingFieldOrValue,

    #[error("field must be a string")]
    FieldNotString,
}

/// A single-field edit requested by the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub field: String,
    pub value: Value,
}

impl UpdateRequest {
    /// Parses a raw POST body.
    ///
    /// A JSON `null` for either key is treated as missing.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] describing the first problem found.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestError> {
        let parsed: Value = serde_json::from_slice(body).map_err(|_| RequestError::MalformedJson)?;
        let Value::Object(mut object) = parsed else {
            return Err(RequestError::NotAnObject);
        };

        let field = object.remove("field").filter(|v| !v.is_null());
        let value = object.remove("value").filter(|v| !v.is_null());
        let (Some(field), Some(value)) = (field, value) else {
            return Err(RequestError::MissingFieldOrValue);
        };

        let Value::String(field) = field else {
            return Err(RequestError::FieldNotString);
        };

        Ok(Self { field, value })
    }
}

/// Successful POST response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
    pub config: ChatConfig,
}

impl UpdateResponse {
    pub fn new(message: impl Into<String>, config: ChatConfig) -> Self {
        Self {
            success: true,
            message: message.into(),
            config,
        }
    }
}

/// Failure body shared by every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
