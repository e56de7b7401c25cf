//! Core errors

use thiserror::Error;

/// Errors produced by the metrics core
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Caller supplied an argument outside the documented domain. Never
    /// silently corrected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An aggregation was requested over a window containing no records.
    #[error("Aggregation window contains no records")]
    EmptyWindow,

    /// The tip-generation service failed (unreachable, timed out, or
    /// returned a malformed payload). Recovered internally with static
    /// fallback content; callers of the public tips API never see this.
    #[error("Tip service failure: {0}")]
    ExternalService(String),
}
