//! order-service entry point

use std::sync::Arc;

use order_service::cache::RedisCache;
use order_service::db::PgOrderStore;
use order_service::events::{AmqpPublisher, EventPublisher, consumers};
use order_service::logger::init_logger;
use order_service::product::ProductClient;
use order_service::{AppState, Config, OrderService, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_logger(config.log_format);

    tracing::info!("Starting order-service (env: {})", config.environment);

    let store = PgOrderStore::connect(
        config.database.connect_options()?,
        config.db_max_connections,
    )
    .await?;
    store.migrate().await?;
    tracing::info!("Order store ready");

    let cache = RedisCache::new(&config.redis_url)?;
    let publisher = Arc::new(AmqpPublisher::connect(&config.rabbitmq_url).await?);
    let products = ProductClient::from_config(&config)?;

    let service = OrderService::new(
        Arc::new(store),
        Arc::new(products),
        Arc::new(cache),
        publisher.clone(),
    );
    let app = api::router(AppState::new(service));

    consumers::spawn_consumers(&config.rabbitmq_url);

    let addr = format!("0.0.0.0:{}", config.app_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("order-service HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    if let Err(e) = publisher.close().await {
        tracing::warn!(error = %e, "Failed to close AMQP publisher");
    }

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
