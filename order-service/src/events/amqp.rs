//! AMQP publisher

use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use std::sync::atomic::{AtomicBool, Ordering};

use super::EventPublisher;
use crate::error::{PublishError, PublishResult};

/// Delivery mode 1: the broker keeps the message in memory only
const TRANSIENT_DELIVERY: u8 = 1;

/// Open/closed state of a publisher; closes exactly once
#[derive(Debug, Default)]
struct CloseGuard {
    closed: AtomicBool,
}

impl CloseGuard {
    /// `Closed` once [`Self::close`] has run
    fn ensure_open(&self) -> PublishResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(PublishError::Closed);
        }
        Ok(())
    }

    /// Mark closed; true only for the first caller
    fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }
}

/// Process-wide publisher owning one AMQP connection and channel
pub struct AmqpPublisher {
    connection: Connection,
    channel: Channel,
    guard: CloseGuard,
}

impl AmqpPublisher {
    /// Connect to the broker and open the publishing channel
    pub async fn connect(url: &str) -> PublishResult<Self> {
        let connection = Connection::connect(url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;
        tracing::info!("AMQP publisher connected");

        Ok(Self {
            connection,
            channel,
            guard: CloseGuard::default(),
        })
    }
}

#[async_trait]
impl EventPublisher for AmqpPublisher {
    async fn publish(&self, exchange: &str, routing_key: &str, payload: &[u8]) -> PublishResult<()> {
        self.guard.ensure_open()?;

        let properties = BasicProperties::default()
            .with_content_type("application/json".into())
            .with_delivery_mode(TRANSIENT_DELIVERY);

        // No publisher confirms: the returned confirm resolves to NotRequested.
        self.channel
            .basic_publish(
                exchange,
                routing_key,
                BasicPublishOptions::default(),
                payload,
                properties,
            )
            .await?;

        Ok(())
    }

    async fn close(&self) -> PublishResult<()> {
        if !self.guard.close() {
            return Ok(());
        }

        self.channel.close(200, "shutdown").await?;
        self.connection.close(200, "shutdown").await?;
        tracing::info!("AMQP publisher closed");
        Ok(())
    }
}
