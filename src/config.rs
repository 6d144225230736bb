//! Configuration Module
//!
//! Handles loading explorer configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API, without a trailing slash
    pub api_base_url: String,
    /// Cache TTL and sweep period in milliseconds
    pub cache_interval_ms: u64,
    /// Number of location areas fetched per page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Rolls (0..100) below this value let the creature escape
    pub catch_threshold: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Remote API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache TTL in milliseconds (default: 10000)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    /// - `POKEDEX_CATCH_THRESHOLD` - Escape threshold out of 100 (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_interval_ms: parse_var("POKEDEX_CACHE_INTERVAL_MS")
                .unwrap_or(defaults.cache_interval_ms),
            page_size: parse_var("POKEDEX_PAGE_SIZE")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
            request_timeout_secs: parse_var("POKEDEX_REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            catch_threshold: parse_var("POKEDEX_CATCH_THRESHOLD")
                .map(|v: u32| v.min(100))
                .unwrap_or(defaults.catch_threshold),
        }
    }

    /// Returns the cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// Returns the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            cache_interval_ms: 10_000,
            page_size: 20,
            request_timeout_secs: 10,
            catch_threshold: 60,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
