//! order-service: order management microservice
//!
//! Creates orders against prices from the product service, stores them in
//! PostgreSQL, announces them on the message broker and serves per-product
//! order lists through a Redis read cache.
//!
//! # Module layout
//!
//! ```text
//! order-service/src/
//! ├── api/        # HTTP routes and handlers
//! ├── cache/      # Read cache (Redis)
//! ├── db/         # Order store (PostgreSQL)
//! ├── events/     # Event publisher and log-only consumers (AMQP)
//! ├── product/    # Product lookup (fixture or HTTP)
//! ├── services/   # Order use cases, best-effort policy
//! ├── config.rs   # Environment configuration
//! ├── error.rs    # Dependency and use-case errors
//! ├── logger.rs   # tracing setup
//! └── state.rs    # Router state
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod logger;
pub mod product;
pub mod services;
pub mod state;

// Re-exports
pub use config::Config;
pub use services::OrderService;
pub use state::AppState;
