//! Order handlers
//!
//! Orchestration failures are logged with their cause and answered with a
//! fixed message; only validation messages reach the caller verbatim.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CreateOrderRequest, Order};

use crate::state::AppState;

/// POST /orders
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(req) = payload.map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
    req.validate()?;

    let order = state.orders.create_order(&req).await.map_err(|e| {
        tracing::error!(product_id = %req.product_id, error = %e, "Failed to create order");
        AppError::new(ErrorCode::OrderCreateFailed).with_detail("cause", e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders/product/{productId}
pub async fn list_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state
        .orders
        .get_orders_by_product_id(&product_id)
        .await
        .map_err(|e| {
            tracing::error!(product_id = %product_id, error = %e, "Failed to get orders");
            AppError::new(ErrorCode::OrderQueryFailed).with_detail("cause", e.to_string())
        })?;

    Ok(Json(orders))
}
