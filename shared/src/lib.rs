//! Shared types for the order service
//!
//! Wire/domain models and the unified HTTP-facing error type. Nothing in
//! this crate performs I/O.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{CreateOrderRequest, NewOrder, Order, OrderStatus, Product};
