//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for the service.
///
/// These only surface at startup; a failed lookup during a request is
/// recovered inside the handler and never escapes as an error status.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the upstream IP lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport-level failure of the outbound request: connect error,
    /// DNS failure, timeout, or body read. All sub-causes map to the same
    /// user-visible error body.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
