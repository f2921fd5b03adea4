//! Configuration Module
//!
//! Loads cache and demo workload settings from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{CacheError, Result};

/// Default byte budget: 1 MiB
const DEFAULT_MAX_BYTES: usize = 1024 * 1024;
const DEFAULT_ENTRY_COUNT: usize = 4096;
const DEFAULT_VALUE_SIZE: usize = 512;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Byte budget for the cache, 0 = unbounded
    pub max_bytes: usize,
    /// Number of entries the demo workload inserts
    pub entry_count: usize,
    /// Size in bytes of each demo value
    pub value_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults. A negative
    /// budget is unparsable and falls back as well.
    ///
    /// # Environment Variables
    /// - `MAX_BYTES` - Cache byte budget, 0 for unbounded (default: 1048576)
    /// - `ENTRY_COUNT` - Demo entries to insert (default: 4096)
    /// - `VALUE_SIZE` - Demo value size in bytes (default: 512)
    pub fn from_env() -> Self {
        Self {
            max_bytes: env::var("MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BYTES),
            entry_count: env::var("ENTRY_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ENTRY_COUNT),
            value_size: env::var("VALUE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VALUE_SIZE),
        }
    }

    /// Like [`from_env`](Self::from_env), but rejects set values that do not
    /// parse instead of falling back.
    pub fn try_from_env() -> Result<Self> {
        Ok(Self {
            max_bytes: parse_var("MAX_BYTES", DEFAULT_MAX_BYTES)?,
            entry_count: parse_var("ENTRY_COUNT", DEFAULT_ENTRY_COUNT)?,
            value_size: parse_var("VALUE_SIZE", DEFAULT_VALUE_SIZE)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            entry_count: DEFAULT_ENTRY_COUNT,
            value_size: DEFAULT_VALUE_SIZE,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            CacheError::InvalidConfig(format!(
                "{} must be a non-negative integer, got {:?}",
                name, raw
            ))
        }),
        Err(_) => Ok(default),
    }
}
