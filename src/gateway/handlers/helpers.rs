//! Handler helper functions

use std::time::{SystemTime, UNIX_EPOCH};

use super::super::types::ApiError;

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Get current time in milliseconds
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
