//! Data models
//!
//! Shared between the order service and its HTTP clients. JSON keys are
//! camelCase to match the public contract.

pub mod order;
pub mod product;

// Re-exports
pub use order::*;
pub use product::*;
