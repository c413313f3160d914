//! Use cases

pub mod best_effort;
pub mod order_service;

pub use best_effort::{Attempt, BestEffort};
pub use order_service::OrderService;
