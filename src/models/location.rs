//! Location area records
//!
//! Shapes of `GET /location-area` (paginated list) and
//! `GET /location-area/{name}` (single area).

use serde::Deserialize;

use super::NamedResource;

/// One page of the location area listing.
///
/// `next` and `previous` are absolute URLs, absent at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Returns the area names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}

/// A single location area and the creatures that can be encountered there.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
    }
}
