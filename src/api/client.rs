//! PokeAPI Client
//!
//! Issues GET requests against the remote API. Every response body is looked
//! up in and stored into the shared [`TtlCache`] keyed by its full URL.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    page_size: u32,
    http: reqwest::Client,
    cache: Arc<TtlCache>,
}

impl PokeApiClient {
    /// Creates a client using the configured base URL, page size and timeout.
    pub fn new(config: &Config, cache: Arc<TtlCache>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            http,
            cache,
        })
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Returns the shared response cache.
    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when present.
    ///
    /// Only successful responses are cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "serving response from cache");
            return Ok(body);
        }

        debug!(url, "fetching from remote");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.insert(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one page of location areas from an absolute page URL.
    pub async fn location_area_page(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches a single location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, normalize(name));
        self.fetch_json(&url).await
    }

    /// Fetches a creature record by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, normalize(name));
        self.fetch_json(&url).await
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base_url: &str) -> PokeApiClient {
        let config = Config {
            api_base_url: base_url.to_string(),
            page_size: 5,
            ..Config::default()
        };
        let cache = Arc::new(TtlCache::new(Duration::from_secs(60)));
        PokeApiClient::new(&config, cache).unwrap()
    }

    #[tokio::test]
    async fn test_first_page_url() {
        let client = client("https://pokeapi.co/api/v2/");
        assert_eq!(
            client.first_page_url(),
            "https://pokeapi.co/api/v2/location-area?offset=0&limit=5"
        );
    }

    #[tokio::test]
    async fn test_fetch_serves_cached_body_without_network() {
        // Unroutable base: any real request would fail
        let client = client("http://127.0.0.1:9");
        let url = "http://127.0.0.1:9/pokemon/pikachu";
        client.cache().insert(
            url,
            Bytes::from_static(br#"{"name":"pikachu","base_experience":112,"height":4,"weight":60}"#),
        );

        let pokemon = client.pokemon("  Pikachu ").await.unwrap();
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.weight, 60);
    }

    #[tokio::test]
    async fn test_cached_malformed_body_is_decode_error() {
        let client = client("http://127.0.0.1:9");
        client
            .cache()
            .insert("http://127.0.0.1:9/location-area/nowhere", Bytes::from_static(b"not json"));

        let result = client.location_area("nowhere").await;
        assert!(matches!(result, Err(PokedexError::Decode(_))));
    }
}
