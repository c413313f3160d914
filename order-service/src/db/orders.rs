//! Order database operations

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{NewOrder, Order, OrderStatus};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::{StoreError, StoreResult};

/// Durable keyed storage of orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert one order. No upsert: a duplicate id is an error.
    ///
    /// Returns the stored order with its store-assigned `created_at`.
    async fn create(&self, order: NewOrder) -> StoreResult<Order>;

    /// All orders for a product, most recent first. Empty when none match.
    async fn get_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Order>>;
}

/// PostgreSQL-backed order store
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool with the given connect options
    pub async fn connect(options: PgConnectOptions, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply embedded schema migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    product_id: String,
    total_price: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse().map_err(|e| StoreError::CorruptRow {
            id: row.id.clone(),
            reason: format!("{e}"),
        })?;

        Ok(Order {
            id: row.id,
            product_id: row.product_id,
            total_price: row.total_price,
            status,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let (created_at,): (DateTime<Utc>,) = sqlx::query_as(
            r#"
            INSERT INTO orders (id, product_id, total_price, status)
            VALUES ($1, $2, $3, $4)
            RETURNING created_at
            "#,
        )
        .bind(&order.id)
        .bind(&order.product_id)
        .bind(order.total_price)
        .bind(order.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(order.into_order(created_at))
    }

    async fn get_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Order>> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, product_id, total_price, status, created_at
            FROM orders
            WHERE product_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }
}
