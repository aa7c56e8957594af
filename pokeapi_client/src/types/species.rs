//! Species payload returned by `/pokemon-species/{id or name}`.

use serde::{Deserialize, Serialize};

use super::NamedResource;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Species {
    pub id: u32,

    pub name: String,

    /// Pokedex color. Missing on a handful of malformed records.
    pub color: Option<NamedResource>,

    /// Language-tagged descriptions, one per game version.
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,

    /// Language-tagged genus labels (e.g. "Mouse Pokémon").
    #[serde(default)]
    pub genera: Vec<Genus>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: Option<NamedResource>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}
