//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::{Uuid, Variant};

use crate::error::AppError;

/// Order status
///
/// This service only ever produces `Pending`; the other states are written by
/// downstream fulfilment and must still be readable from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Text form stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text that maps to no known [`OrderStatus`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Order built by the service, not yet persisted
///
/// Has no creation timestamp: the store assigns it on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub id: String,
    pub product_id: String,
    pub total_price: f64,
    pub status: OrderStatus,
}

impl NewOrder {
    /// Build a pending order with a fresh UUID v4.
    ///
    /// `total_price = unit_price * quantity`, computed here once and never
    /// recomputed afterwards.
    pub fn pending(product_id: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            total_price: unit_price * quantity as f64,
            status: OrderStatus::Pending,
        }
    }

    /// Attach the store-assigned creation time
    pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
        Order {
            id: self.id,
            product_id: self.product_id,
            total_price: self.total_price,
            status: self.status,
            created_at,
        }
    }
}

/// Persisted order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub product_id: String,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Create order payload (`POST /orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl CreateOrderRequest {
    /// Check the request before it reaches the service layer.
    ///
    /// `productId` must be a UUID v4 in lowercase hyphenated form, exactly as
    /// the product service and the order store key it. `quantity` must be at
    /// least 1.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.product_id.trim().is_empty() {
            return Err(AppError::validation("productId is required").with_detail("field", "productId"));
        }
        if !is_canonical_uuid_v4(&self.product_id) {
            return Err(AppError::validation("productId must be a valid UUID v4")
                .with_detail("field", "productId")
                .with_detail("value", self.product_id.as_str()));
        }
        if self.quantity < 1 {
            return Err(AppError::validation("quantity must be at least 1")
                .with_detail("field", "quantity")
                .with_detail("value", self.quantity));
        }
        Ok(())
    }
}

/// `xxxxxxxx-xxxx-4xxx-[89ab]xxx-xxxxxxxxxxxx`, lowercase, nothing around it
fn is_canonical_uuid_v4(s: &str) -> bool {
    match Uuid::try_parse(s) {
        Ok(id) => {
            id.get_version_num() == 4
                && id.get_variant() == Variant::RFC4122
                && id.hyphenated().to_string() == s
        }
        Err(_) => false,
    }
}
