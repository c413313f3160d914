//! Best-effort policy for soft dependencies
//!
//! Cache population and event publication may fail without failing the
//! request. Run them through [`BestEffort::run`]: the error is logged and
//! reported back as an [`Attempt`], never propagated and never retried.

use std::fmt::Display;
use std::future::Future;

/// Outcome of a best-effort operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Done,
    /// Failed and logged; carries the rendered error
    Failed(String),
}

impl Attempt {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Perform, log on failure, continue
pub struct BestEffort;

impl BestEffort {
    pub async fn run<F, T, E>(operation: &'static str, fut: F) -> Attempt
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        match fut.await {
            Ok(_) => Attempt::Done,
            Err(e) => {
                let reason = e.to_string();
                tracing::warn!(operation, error = %reason, "Best-effort operation failed");
                Attempt::Failed(reason)
            }
        }
    }
}
