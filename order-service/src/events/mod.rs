//! Domain events on the message broker
//!
//! One topic exchange (`amq.topic`). This service publishes `order.created`
//! and runs log-only consumers for `order.created` and `product.created`.

mod amqp;
pub mod consumers;

pub use amqp::AmqpPublisher;

use async_trait::async_trait;

use crate::error::PublishResult;

/// Topic exchange all events go through
pub const ORDER_EXCHANGE: &str = "amq.topic";

/// Routing key of the event emitted after an order is stored
pub const ORDER_CREATED: &str = "order.created";

/// Routing key of product events emitted by the product service
pub const PRODUCT_CREATED: &str = "product.created";

/// Fire-and-forget emission onto the broker
///
/// No consumer receipt, no retry. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: &[u8]) -> PublishResult<()>;

    /// Release the channel and connection. Called once at shutdown.
    async fn close(&self) -> PublishResult<()>;
}
