//! API Module
//!
//! HTTP client for the remote API, memoized through the TTL cache.
//!
//! # Endpoints used
//! - `GET /location-area?offset=&limit=` - Paginated location areas
//! - `GET /location-area/{name}` - Creatures encountered in an area
//! - `GET /pokemon/{name}` - Creature details

mod client;

pub use client::PokeApiClient;
