//! Error types for the order service
//!
//! One enum per dependency plus [`OrderError`] for the use cases. Hard
//! dependencies (product lookup, store) surface through `OrderError`; soft
//! ones (cache, broker) are only ever logged by the best-effort policy.

use thiserror::Error;

/// Product lookup failure
#[derive(Debug, Error)]
pub enum ProductError {
    /// Product service answered 404
    #[error("product with id {0} not found")]
    NotFound(String),

    /// Any other non-2xx answer
    #[error("failed to get product: status {status}, body: {body}")]
    Status { status: u16, body: String },

    /// Connection refused, timeout, DNS, body read
    #[error("product service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Fixture file could not be read
    #[error("failed to read product fixture {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not a product
    #[error("failed to parse product payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Order store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Row that cannot be mapped back to an order
    #[error("corrupt order row {id}: {reason}")]
    CorruptRow { id: String, reason: String },
}

/// Read cache failure
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("failed to encode cache value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Event publication failure
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("amqp error: {0}")]
    Amqp(#[from] lapin::Error),

    #[error("failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// Publisher was already closed
    #[error("publisher channel is closed")]
    Closed,
}

/// Use-case failure returned by [`crate::services::OrderService`]
#[derive(Debug, Error)]
pub enum OrderError {
    /// Product lookup failed; nothing was written or published
    #[error("failed to fetch product: {0}")]
    ProductFetch(#[source] ProductError),

    /// Order store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ProductResult<T> = Result<T, ProductError>;
pub type StoreResult<T> = Result<T, StoreError>;
pub type CacheResult<T> = Result<T, CacheError>;
pub type PublishResult<T> = Result<T, PublishError>;
pub type OrderResult<T> = Result<T, OrderError>;
