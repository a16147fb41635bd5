//! Gateway types module
//!
//! - [`request`]: body extraction with uniform validation errors
//! - [`response`]: response envelope and error codes
//! - [`error`]: `ApiError` and the status mapping of service errors

pub mod error;
pub mod request;
pub mod response;

pub use error::{ApiError, ApiResult, created, ok};
pub use request::JsonBody;
pub use response::{ApiResponse, error_codes};
