//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Remote responses are memoized in a TTL cache swept by a background task.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TtlCache;
pub use config::Config;
pub use error::{PokedexError, Result};
