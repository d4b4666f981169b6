//! Harness error type.

use thiserror::Error;

/// Errors surfaced by fixture and report tooling.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture/report serialization failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown ctype symbol '{0}'")]
    UnknownSymbol(String),

    #[error("input {input} is outside the host ctype table domain")]
    HostDomain { input: i32 },

    #[error("structured log validation failed with {0} error(s)")]
    InvalidLog(usize),
}
