//! Error types for the fallible edges of the domain crate.

use thiserror::Error;

/// Errors raised while decoding report data.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report id: {0}")]
    InvalidId(#[from] ulid::DecodeError),

    #[error("malformed report data: {0}")]
    Json(#[from] serde_json::Error),
}
