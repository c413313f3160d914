//! Error codes for the order service
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried by [`super::AppError`]
///
/// Serialized as a plain number in logs and error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request failed field validation
    ValidationFailed = 2,
    /// No route for the request
    NotFound = 3,
    /// Body could not be read as the expected JSON
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Order creation failed in a hard dependency
    OrderCreateFailed = 4010,
    /// Order query failed in a hard dependency
    OrderQueryFailed = 4011,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request body",
            Self::OrderCreateFailed => "Failed to create order",
            Self::OrderQueryFailed => "Failed to get orders",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Number that maps to no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            4010 => Self::OrderCreateFailed,
            4011 => Self::OrderQueryFailed,
            _ => return Err(InvalidErrorCode(value)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
