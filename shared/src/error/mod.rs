//! HTTP-facing error type
//!
//! [`ErrorCode`] picks the status, [`AppError`] carries the message the
//! caller sees and renders as `{"error": "<message>"}`.
//!
//! Code ranges: 0xxx general, 4xxx order.
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::OrderCreateFailed);
//! assert_eq!(err.message, "Failed to create order");
//! assert_eq!(err.http_status(), http::StatusCode::INTERNAL_SERVER_ERROR);
//!
//! let err = AppError::validation("quantity must be at least 1").with_detail("field", "quantity");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
