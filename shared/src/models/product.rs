//! Product Model

use serde::{Deserialize, Serialize};

/// Product as served by the external product service
///
/// Read-only for this service: fetched fresh on every order creation and
/// never cached or persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Unit price, currency-agnostic
    pub price: f64,
    /// Available quantity
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub created_at: String,
}
