mod meta;
pub use self::meta::{NamedResource, NamedResourceList};

mod pokemon;
pub use self::pokemon::{
    AbilitySlot, ArtworkSprite, OtherSprites, Pokemon, Sprites, StatEntry, TypeSlot,
};

mod species;
pub use self::species::{FlavorText, Genus, Species};

mod pokemon_type;
pub use self::pokemon_type::{TypeDetail, TypeMember};
