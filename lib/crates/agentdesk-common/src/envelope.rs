use serde::{Deserialize, Serialize};

/// Response body wrapping every gateway reply.
///
/// Success: `{"success": true, "data": ...}`.
/// Failure: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload (e.g. after a delete).
    #[must_use]
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}
