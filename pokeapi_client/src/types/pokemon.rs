//! Pokemon payload returned by `/pokemon/{id or name}`.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Entity record. Only the fields the aggregation layer reads are modelled;
/// everything else in the upstream payload is ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pokemon {
    pub id: u32,

    pub name: String,

    /// Height in decimetres.
    pub height: u32,

    /// Weight in hectograms.
    pub weight: u32,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    #[serde(default)]
    pub stats: Vec<StatEntry>,

    #[serde(default)]
    pub sprites: Sprites,

    /// Species this Pokemon belongs to. Alternate forms point at their
    /// base species.
    pub species: NamedResource,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

impl Sprites {
    /// Official artwork URL, when the upstream has one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
    }
}
