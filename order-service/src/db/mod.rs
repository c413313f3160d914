//! Database access layer

pub mod orders;

pub use orders::{OrderStore, PgOrderStore};
