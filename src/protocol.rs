//! Wire DTOs that are not domain records: the remote error body and the
//! development stub's small responses.

use serde::{Deserialize, Serialize};

/// Error body in the shape the development stub emits. The client-side
/// classifier reads incoming bodies as loose JSON instead, so extra fields or
/// odd types from a real server never cost the error code.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is either a bare string or an object.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Structured(StructuredDetail),
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StructuredDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_allowed: Option<bool>,
}

impl ApiErrorResponse {
    /// Structured error body, as the development stub emits it.
    pub fn structured(code: &str, message: impl Into<String>) -> Self {
        Self {
            detail: Some(ErrorDetail::Structured(StructuredDetail {
                code: Some(code.to_string()),
                message: Some(message.into()),
                details: None,
                retry_allowed: None,
            })),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub ok: bool,
}
