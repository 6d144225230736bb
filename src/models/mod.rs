//! Models Module
//!
//! Records decoded from the remote API's JSON responses.
//! Fields the explorer does not use are ignored during decoding.

mod location;
mod pokemon;

pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::Deserialize;

/// A name plus the URL of the full resource, as used throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}
