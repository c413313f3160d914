//! Application state

use std::sync::Arc;

use crate::services::OrderService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order use cases
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(orders: OrderService) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }
}
