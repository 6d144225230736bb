//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Remote responses are memoized in a TTL cache swept by a background task.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{Repl, Session};
use pokedex::{Config, PokeApiClient, TtlCache};

/// Main entry point for the Pokedex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and REPL session
/// 5. Run the read loop until `exit` or end of input
/// 6. Close the cache so the reaper stops before the runtime shuts down
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api={}, cache_interval={}ms, page_size={}",
        config.api_base_url, config.cache_interval_ms, config.page_size
    );

    let cache = Arc::new(TtlCache::new(config.cache_interval()));
    let client = PokeApiClient::new(&config, Arc::clone(&cache))
        .context("Failed to build HTTP client")?;

    let mut repl = Repl::new(Session::new(client, &config))
        .context("Failed to initialize line editor")?;
    repl.run().await?;

    // The session holds the other handle; release it so the cache can be closed
    drop(repl);
    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.close().await,
        Err(_) => info!("Cache still shared at exit; reaper stops on drop"),
    }

    info!("Pokedex shutdown complete");
    Ok(())
}
