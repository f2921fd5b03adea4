//! Error types for the cache crate
//!
//! Cache operations report absence or rejection through `bool` and `Option`.
//! These errors cover configuration and value decoding.

use std::str::Utf8Error;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A configuration value could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Stored bytes are not valid UTF-8
    #[error("Invalid UTF-8 in value: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
