//! Type payload returned by `/type/{name}`.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A type together with its full, unpaginated membership list.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TypeDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TypeMember {
    pub slot: u8,
    pub pokemon: NamedResource,
}
