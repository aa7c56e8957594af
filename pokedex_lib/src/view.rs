//! Display-ready shapes returned by the service. All fields serialize in
//! camelCase.

use pokeapi_client::types::Pokemon;
use serde::{Deserialize, Serialize};

/// Minimal identity used in list and search results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    /// Type names in upstream slot order.
    pub types: Vec<String>,
}

/// Full merged view of one Pokemon and its species.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub types: Vec<String>,
    /// Metres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub abilities: Vec<AbilityView>,
    pub stats: Vec<StatView>,
    pub sprite_url: Option<String>,
    pub artwork_url: Option<String>,
    pub color: String,
    pub description: String,
    pub genus: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbilityView {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatView {
    pub name: String,
    pub base_value: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    pub display_name: String,
}

impl TypeDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name(name),
        }
    }
}

impl Summary {
    /// Summary for a list entry whose entity could not be fetched.
    pub fn minimal(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            display_name: display_name(name),
            types: Vec::new(),
        }
    }
}

impl From<&Pokemon> for Summary {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            display_name: display_name(&pokemon.name),
            types: type_names(pokemon),
        }
    }
}

/// Type names of a Pokemon ordered by slot.
pub fn type_names(pokemon: &Pokemon) -> Vec<String> {
    let mut slots: Vec<_> = pokemon.types.iter().collect();
    slots.sort_by_key(|t| t.slot);
    slots.into_iter().map(|t| t.kind.name.clone()).collect()
}

/// Capitalize the first character, leave the rest untouched.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_first_letter_only() {
        assert_eq!(display_name("fire"), "Fire");
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name("Already"), "Already");
        assert_eq!(display_name("ñandú"), "Ñandú");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn type_descriptor_new() {
        let fire = TypeDescriptor::new("fire");
        assert_eq!(fire.name, "fire");
        assert_eq!(fire.display_name, "Fire");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = Summary::minimal(25, "pikachu");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 25,
                "name": "pikachu",
                "displayName": "Pikachu",
                "types": []
            })
        );
    }

    #[test]
    fn summary_types_follow_slot_order() {
        let pokemon: Pokemon = serde_json::from_value(serde_json::json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ],
            "species": { "name": "charizard", "url": "" }
        }))
        .unwrap();
        let summary = Summary::from(&pokemon);
        assert_eq!(summary.types, vec!["fire", "flying"]);
        assert_eq!(summary.display_name, "Charizard");
    }
}
