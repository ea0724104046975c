//! Crate-level error types.
//!
//! [`HearthError`] unifies every error source (configuration, HTTP
//! transport) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HearthError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A configuration value could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A price-service fetch failed or answered with a non-success
    /// status. Parsing never produces this; malformed payload tokens
    /// degrade to zero instead.
    #[error("price fetch failed: {0}")]
    Fetch(String),

    /// An HTTP client operation failed outside of a fetch.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
