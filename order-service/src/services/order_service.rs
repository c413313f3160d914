//! Order orchestration
//!
//! Hard dependencies: product lookup and order store. Their failures end the
//! use case. Soft dependencies: read cache and event publisher, run through
//! [`BestEffort`].

use shared::models::{CreateOrderRequest, NewOrder, Order};
use std::sync::Arc;

use super::best_effort::BestEffort;
use crate::cache::{ORDERS_CACHE_TTL, ReadCache, orders_cache_key};
use crate::db::OrderStore;
use crate::error::{OrderError, OrderResult};
use crate::events::{EventPublisher, ORDER_CREATED, ORDER_EXCHANGE};
use crate::product::ProductLookup;

/// Order use cases over injected dependencies
///
/// Stateless: concurrent calls share nothing but the dependency handles.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    products: Arc<dyn ProductLookup>,
    cache: Arc<dyn ReadCache>,
    publisher: Arc<dyn EventPublisher>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        products: Arc<dyn ProductLookup>,
        cache: Arc<dyn ReadCache>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            store,
            products,
            cache,
            publisher,
        }
    }

    /// Create a pending order for an existing product.
    ///
    /// Lookup, price, store, then announce `order.created`. Nothing is written
    /// when the lookup fails and nothing is published when the write fails.
    /// A failed publish is logged only; the order is already stored.
    pub async fn create_order(&self, req: &CreateOrderRequest) -> OrderResult<Order> {
        let product = self
            .products
            .get_product_by_id(&req.product_id)
            .await
            .map_err(OrderError::ProductFetch)?;

        let new_order = NewOrder::pending(&req.product_id, product.price, req.quantity);
        let order = self.store.create(new_order).await?;

        tracing::info!(
            order_id = %order.id,
            product_id = %order.product_id,
            total_price = order.total_price,
            "Order created"
        );

        BestEffort::run("publish order.created", async {
            let payload = serde_json::to_vec(&order)?;
            self.publisher
                .publish(ORDER_EXCHANGE, ORDER_CREATED, &payload)
                .await
        })
        .await;

        Ok(order)
    }

    /// Orders for a product, most recent first.
    ///
    /// Served from the read cache when it holds a readable entry; otherwise
    /// from the store, caching non-empty results for [`ORDERS_CACHE_TTL`].
    pub async fn get_orders_by_product_id(&self, product_id: &str) -> OrderResult<Vec<Order>> {
        let key = orders_cache_key(product_id);

        match self.cache.get(&key).await {
            Ok(Some(cached)) => match serde_json::from_str::<Vec<Order>>(&cached) {
                Ok(orders) => {
                    tracing::debug!(product_id, count = orders.len(), "Orders cache hit");
                    return Ok(orders);
                }
                Err(e) => {
                    tracing::warn!(product_id, error = %e, "Unreadable orders cache entry, treating as miss");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(product_id, error = %e, "Orders cache read failed, treating as miss");
            }
        }

        let orders = self.store.get_by_product_id(product_id).await?;

        if !orders.is_empty() {
            BestEffort::run("cache orders", async {
                let value = serde_json::to_string(&orders)?;
                self.cache.set(&key, &value, ORDERS_CACHE_TTL).await
            })
            .await;
        }

        Ok(orders)
    }
}
