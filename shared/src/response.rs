//! API Response types
//!
//! Standardized response envelope used by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "statusCode": 200,
///     "data": { ... },
///     "message": "Success",
///     "success": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// HTTP-style status code echoed in the body
    pub status_code: u16,
    /// Response data (absent on errors and unit operations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Whether the operation succeeded
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            data: Some(data),
            message: "Success".to_string(),
            success: true,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            data: Some(data),
            message: message.into(),
            success: true,
        }
    }

    /// Create an error response
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data: None,
            message: message.into(),
            success: false,
        }
    }
}
