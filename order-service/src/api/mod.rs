//! HTTP routes
//!
//! - GET  /health
//! - POST /orders
//! - GET  /orders/product/{productId}

pub mod health;
pub mod orders;

use axum::Router;
use axum::routing::{get, post};
use shared::error::{AppError, ErrorCode};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the service router
pub fn router(state: AppState) -> Router {
    let orders = Router::new()
        .route("/orders", post(orders::create))
        .route("/orders/product/{product_id}", get(orders::list_by_product));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(orders)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched paths answer in the same `{"error": ...}` shape
async fn not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}
