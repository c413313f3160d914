//! Log-only event consumers
//!
//! Each consumer has its own connection, declares its queue, binds it to
//! [`ORDER_EXCHANGE`] and logs every delivery. Setup failures end the
//! consumer task, never the service.

use futures::StreamExt;
use lapin::options::{BasicConsumeOptions, QueueBindOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{Connection, ConnectionProperties};
use std::borrow::Cow;
use tokio::task::JoinHandle;

use super::{ORDER_CREATED, ORDER_EXCHANGE, PRODUCT_CREATED};

/// Queue binding and handler of one consumer
#[derive(Debug, Clone, Copy)]
pub struct ConsumerBinding {
    pub name: &'static str,
    pub queue: &'static str,
    pub routing_key: &'static str,
    pub handler: fn(&[u8]),
}

/// Logs every created order
pub const ORDER_LOGGER: ConsumerBinding = ConsumerBinding {
    name: "order-logger",
    queue: "order_queue",
    routing_key: ORDER_CREATED,
    handler: log_order_event,
};

/// Logs product events from the product service
pub const PRODUCT_LISTENER: ConsumerBinding = ConsumerBinding {
    name: "product-listener",
    queue: "product_queue",
    routing_key: PRODUCT_CREATED,
    handler: log_product_event,
};

fn payload_text(payload: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(payload)
}

fn log_order_event(payload: &[u8]) {
    tracing::info!(payload = %payload_text(payload), "Processed order event");
}

fn log_product_event(payload: &[u8]) {
    tracing::info!(payload = %payload_text(payload), "Received product event");
}

/// Start both consumers in the background
pub fn spawn_consumers(url: &str) -> Vec<JoinHandle<()>> {
    [ORDER_LOGGER, PRODUCT_LISTENER]
        .into_iter()
        .map(|binding| {
            let url = url.to_string();
            tokio::spawn(async move {
                tracing::info!(consumer = binding.name, queue = binding.queue, "Starting consumer");
                match run_consumer(&url, binding).await {
                    Ok(()) => tracing::warn!(consumer = binding.name, "Consumer stream ended"),
                    Err(e) => tracing::error!(consumer = binding.name, error = %e, "Consumer failed"),
                }
            })
        })
        .collect()
}

async fn run_consumer(url: &str, binding: ConsumerBinding) -> Result<(), lapin::Error> {
    let connection = Connection::connect(url, ConnectionProperties::default()).await?;
    let channel = connection.create_channel().await?;

    channel
        .queue_declare(
            binding.queue,
            QueueDeclareOptions::default(),
            FieldTable::default(),
        )
        .await?;
    channel
        .queue_bind(
            binding.queue,
            ORDER_EXCHANGE,
            binding.routing_key,
            QueueBindOptions::default(),
            FieldTable::default(),
        )
        .await?;

    let mut consumer = channel
        .basic_consume(
            binding.queue,
            binding.name,
            BasicConsumeOptions {
                no_ack: true,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    tracing::info!(
        consumer = binding.name,
        exchange = ORDER_EXCHANGE,
        routing_key = binding.routing_key,
        queue = binding.queue,
        "Consumer bound"
    );

    while let Some(delivery) = consumer.next().await {
        let delivery = delivery?;
        (binding.handler)(&delivery.data);
    }

    Ok(())
}
