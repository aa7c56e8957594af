//! Runtime configuration read from the environment.

use std::time::Duration;

use url::Url;

use crate::error::PokedexError;

pub const DEFAULT_BASE_URL: &str = pokeapi_client::DEFAULT_BASE_URL;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Catalog entries pulled per search fallback. Comfortably above the
/// number of Pokemon the upstream serves today.
pub const DEFAULT_CATALOG_LIMIT: u32 = 2000;

pub const ENV_BASE_URL: &str = "POKEDEX_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_HTTP_TIMEOUT_SECS";
pub const ENV_CATALOG_LIMIT: &str = "POKEDEX_CATALOG_LIMIT";

/// Settings for the upstream gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// API root every request path is appended to.
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
    /// Number of catalog entries fetched when a search falls back to
    /// substring matching.
    pub catalog_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            catalog_limit: DEFAULT_CATALOG_LIMIT,
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables. Missing or
    /// unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_or(lookup(ENV_TIMEOUT_SECS), DEFAULT_TIMEOUT_SECS);
        let catalog_limit = parse_or(lookup(ENV_CATALOG_LIMIT), DEFAULT_CATALOG_LIMIT);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            catalog_limit,
        }
    }

    /// Replaces the base URL, e.g. from a command-line override.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().to_string();
        self
    }

    /// Checks that the base URL is an absolute http(s) URL and that the
    /// numeric settings are usable.
    pub fn validate(&self) -> Result<(), PokedexError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            PokedexError::InvalidInput(format!("base URL '{}' is invalid: {}", self.base_url, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PokedexError::InvalidInput(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(PokedexError::InvalidInput(
                "HTTP timeout must be at least one second".to_string(),
            ));
        }
        if self.catalog_limit == 0 {
            return Err(PokedexError::InvalidInput(
                "catalog limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}
