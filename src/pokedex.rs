//! Pokedex Module
//!
//! In-memory registry of caught creatures, kept sorted by name.

use std::collections::BTreeMap;

use crate::models::Pokemon;

#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught creature, replacing any earlier record with the same name.
    pub fn add(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.insert(name.into(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Caught names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str, weight: u32) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: None,
            height: 1,
            weight,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut dex = Pokedex::new();
        assert!(dex.is_empty());

        dex.add("pidgey", pokemon("pidgey", 18));

        assert!(dex.contains("pidgey"));
        assert_eq!(dex.get("pidgey").map(|p| p.weight), Some(18));
        assert!(dex.get("rattata").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let mut dex = Pokedex::new();
        dex.add("zubat", pokemon("zubat", 75));
        dex.add("abra", pokemon("abra", 195));
        dex.add("mew", pokemon("mew", 40));

        assert_eq!(dex.names().collect::<Vec<_>>(), vec!["abra", "mew", "zubat"]);
    }

    #[test]
    fn test_recatch_replaces_record() {
        let mut dex = Pokedex::new();
        dex.add("abra", pokemon("abra", 1));
        dex.add("abra", pokemon("abra", 2));

        assert_eq!(dex.len(), 1);
        assert_eq!(dex.get("abra").map(|p| p.weight), Some(2));
    }
}
