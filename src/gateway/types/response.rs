//! API response envelope and error codes
//!
//! Successful registry calls return the bare record (or sequence of records).
//! Errors and service endpoints use the unified envelope:
//! - code: 0 = success, non-zero = error code
//! - msg: short message description
//! - data: payload (success only)

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const REFERENCED_RECORD_MISSING: i32 = 1004;

    // Resource errors (4xxx)
    pub const RECORD_NOT_FOUND: i32 = 4004;
    pub const METHOD_NOT_ALLOWED: i32 = 4005;

    // Server errors (5xxx)
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}
