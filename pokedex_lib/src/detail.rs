//! Merging an entity payload and its (possibly unavailable) species payload
//! into a [`DetailRecord`].

use pokeapi_client::types::{NamedResource, Pokemon, Species};

use crate::view::{display_name, type_names, AbilityView, DetailRecord, StatView};

/// Language tag used to pick descriptions and genus labels.
pub const LOCALE: &str = "en";
pub const DEFAULT_COLOR: &str = "gray";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Result of the secondary species lookup.
#[derive(Clone, Debug)]
pub enum SpeciesLookup {
    Loaded(Species),
    /// The species fetch failed for any reason. Absorbed into defaults.
    Unavailable,
}

impl SpeciesLookup {
    fn species(&self) -> Option<&Species> {
        match self {
            Self::Loaded(species) => Some(species),
            Self::Unavailable => None,
        }
    }
}

/// Key to fetch the species with: the entity's species reference, or its id
/// when the reference carries no name.
pub fn species_key(pokemon: &Pokemon) -> String {
    if pokemon.species.name.trim().is_empty() {
        pokemon.id.to_string()
    } else {
        pokemon.species.name.clone()
    }
}

/// Pure merge of the two upstream payloads.
pub fn merge_detail(pokemon: &Pokemon, species: &SpeciesLookup) -> DetailRecord {
    let species = species.species();

    let mut abilities: Vec<_> = pokemon.abilities.iter().collect();
    abilities.sort_by_key(|a| a.slot);

    DetailRecord {
        id: pokemon.id,
        name: pokemon.name.clone(),
        display_name: display_name(&pokemon.name),
        types: type_names(pokemon),
        height: decimal_tenths(pokemon.height),
        weight: decimal_tenths(pokemon.weight),
        abilities: abilities
            .into_iter()
            .map(|a| AbilityView {
                name: a.ability.name.clone(),
                is_hidden: a.is_hidden,
            })
            .collect(),
        stats: pokemon
            .stats
            .iter()
            .map(|s| StatView {
                name: s.stat.name.clone(),
                base_value: s.base_stat,
            })
            .collect(),
        sprite_url: pokemon.sprites.front_default.clone(),
        artwork_url: pokemon.sprites.artwork_url().map(str::to_string),
        color: species
            .and_then(|s| s.color.as_ref())
            .map(|c| c.name.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        description: species
            .and_then(|s| {
                localized(&s.flavor_text_entries, |e| &e.language, |e| &e.flavor_text)
            })
            .map(clean_flavor_text)
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        genus: species
            .and_then(|s| localized(&s.genera, |g| &g.language, |g| &g.genus))
            .map(str::to_string),
    }
}

/// Upstream integer tenths (decimetres, hectograms) to base units.
pub fn decimal_tenths(value: u32) -> f64 {
    f64::from(value) / 10.0
}

/// First entry tagged with [`LOCALE`].
fn localized<'a, T>(
    entries: &'a [T],
    language: impl Fn(&T) -> &NamedResource,
    text: impl Fn(&'a T) -> &'a String,
) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| language(*e).name == LOCALE)
        .map(|e| text(e).as_str())
}

/// Flavor text is stored with the line breaks and page breaks of the game
/// text boxes. Collapse every whitespace run to a single space.
fn clean_flavor_text(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '\u{ad}')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
