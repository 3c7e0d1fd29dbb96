//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KUNDAN_CATALOG_PATH` - JSON catalog file to use instead of the built-in seed
//! - `KUNDAN_CACHE_TTL_SECS` - Catalog cache time-to-live in seconds (default: 300)
//! - `KUNDAN_RNG_SEED` - Seed for order numbers, for reproducible demo output

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog file replacing the built-in seed
    pub catalog_path: Option<PathBuf>,
    /// Time-to-live for cached catalog data
    pub cache_ttl: Duration,
    /// Fixed seed for generated order numbers
    pub rng_seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup("KUNDAN_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let cache_ttl_secs = lookup("KUNDAN_CACHE_TTL_SECS")
            .map(|v| parse_var::<u64>("KUNDAN_CACHE_TTL_SECS", &v))
            .transpose()?
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);
        let rng_seed = lookup("KUNDAN_RNG_SEED")
            .map(|v| parse_var::<u64>("KUNDAN_RNG_SEED", &v))
            .transpose()?;

        Ok(Self {
            catalog_path,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            rng_seed,
        })
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
