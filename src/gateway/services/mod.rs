//! Gateway Services Layer
//!
//! Business logic for both registries. Handlers are thin HTTP adapters that
//! parse input, delegate here and encode the result.

pub mod order;
pub mod user;

pub use order::OrderService;
pub use user::UserService;

use thiserror::Error;

use crate::core_types::{RecordId, UserId};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input: unparsable body or id
    #[error("{0}")]
    Validation(String),

    /// Referenced user does not exist
    #[error("User {0} not found")]
    Referential(UserId),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("User existence check unavailable: {0}")]
    OracleUnavailable(String),
}

/// Parse a path segment as a record id (non-negative integer).
pub fn parse_record_id(raw: &str, what: &str) -> Result<RecordId, ServiceError> {
    raw.parse::<RecordId>()
        .map_err(|_| ServiceError::Validation(format!("Invalid {}: {:?}", what, raw)))
}
