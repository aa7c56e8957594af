//! In-memory [`FetchGateway`] for tests. Records how often each endpoint is
//! called so tests can assert that a path was or was not taken.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pokeapi_client::types::{NamedResource, NamedResourceList, Pokemon, Species};

use crate::catalog::filter_catalog;
use crate::error::FetchError;
use crate::gateway::FetchGateway;
use crate::validation::normalize_key;

/// Gateway endpoints, used to read call counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    EntityList,
    Entity,
    Species,
    AllTypes,
    TypeMembers,
    SearchCatalog,
}

const ENDPOINTS: [Endpoint; 6] = [
    Endpoint::EntityList,
    Endpoint::Entity,
    Endpoint::Species,
    Endpoint::AllTypes,
    Endpoint::TypeMembers,
    Endpoint::SearchCatalog,
];

/// Builder-style fake. Anything not registered is reported as `NotFound`;
/// keys registered as failing report `Failure`.
#[derive(Default)]
pub struct FakeGateway {
    catalog: Vec<NamedResource>,
    entities: HashMap<String, Pokemon>,
    species: HashMap<String, Species>,
    types: Vec<NamedResource>,
    type_members: HashMap<String, Vec<NamedResource>>,
    failing_entities: HashSet<String>,
    failing_species: HashSet<String>,
    fail_lists: bool,
    calls: [AtomicUsize; 6],
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a Pokemon, reachable by name and by id. It is also appended
    /// to the catalog.
    pub fn with_entity(mut self, pokemon: Pokemon) -> Self {
        self.catalog.push(NamedResource {
            name: pokemon.name.clone(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", pokemon.id),
        });
        self.entities.insert(pokemon.id.to_string(), pokemon.clone());
        self.entities.insert(pokemon.name.clone(), pokemon);
        self
    }

    /// Appends a catalog entry without a fetchable entity behind it.
    pub fn with_catalog_entry(mut self, name: &str, id: u32) -> Self {
        self.catalog.push(NamedResource {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
        });
        self
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species.insert(species.name.clone(), species);
        self
    }

    pub fn with_types(mut self, names: &[&str]) -> Self {
        self.types = names
            .iter()
            .enumerate()
            .map(|(i, name)| NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/type/{}/", i + 1),
            })
            .collect();
        self
    }

    pub fn with_type_members(mut self, type_name: &str, members: &[&str]) -> Self {
        let members = members
            .iter()
            .map(|name| {
                let url = self
                    .catalog
                    .iter()
                    .find(|entry| entry.name == *name)
                    .map(|entry| entry.url.clone())
                    .unwrap_or_default();
                NamedResource {
                    name: name.to_string(),
                    url,
                }
            })
            .collect();
        self.type_members.insert(type_name.to_string(), members);
        self
    }

    /// Entity lookups for `key` fail with a generic fault.
    pub fn with_failing_entity(mut self, key: &str) -> Self {
        self.failing_entities.insert(key.to_string());
        self
    }

    /// Species lookups for `key` fail with a generic fault.
    pub fn with_failing_species(mut self, key: &str) -> Self {
        self.failing_species.insert(key.to_string());
        self
    }

    /// Catalog, type list and type membership calls fail.
    pub fn with_failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    /// Number of calls made to `endpoint` so far.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls[index(endpoint)].load(Ordering::SeqCst)
    }

    /// Number of calls across all endpoints.
    pub fn total_calls(&self) -> usize {
        ENDPOINTS.iter().map(|e| self.calls(*e)).sum()
    }

    fn record(&self, endpoint: Endpoint) {
        self.calls[index(endpoint)].fetch_add(1, Ordering::SeqCst);
    }

    fn check_lists(&self) -> Result<(), FetchError> {
        if self.fail_lists {
            Err(FetchError::Failure)
        } else {
            Ok(())
        }
    }
}

fn index(endpoint: Endpoint) -> usize {
    ENDPOINTS
        .iter()
        .position(|e| *e == endpoint)
        .unwrap_or_default()
}

#[async_trait]
impl FetchGateway for FakeGateway {
    async fn fetch_entity_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<NamedResourceList, FetchError> {
        self.record(Endpoint::EntityList);
        self.check_lists()?;
        let results = self
            .catalog
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(NamedResourceList {
            count: self.catalog.len() as u32,
            next: None,
            previous: None,
            results,
        })
    }

    async fn fetch_entity(&self, key: &str) -> Result<Pokemon, FetchError> {
        self.record(Endpoint::Entity);
        let key = normalize_key(key);
        if self.failing_entities.contains(&key) {
            return Err(FetchError::Failure);
        }
        self.entities.get(&key).cloned().ok_or(FetchError::NotFound)
    }

    async fn fetch_species(&self, key: &str) -> Result<Species, FetchError> {
        self.record(Endpoint::Species);
        let key = normalize_key(key);
        if self.failing_species.contains(&key) {
            return Err(FetchError::Failure);
        }
        self.species.get(&key).cloned().ok_or(FetchError::NotFound)
    }

    async fn fetch_all_types(&self) -> Result<Vec<NamedResource>, FetchError> {
        self.record(Endpoint::AllTypes);
        self.check_lists()?;
        Ok(self.types.clone())
    }

    async fn fetch_type_members(
        &self,
        type_name: &str,
    ) -> Result<Vec<NamedResource>, FetchError> {
        self.record(Endpoint::TypeMembers);
        self.check_lists()?;
        self.type_members
            .get(&normalize_key(type_name))
            .cloned()
            .ok_or(FetchError::NotFound)
    }

    async fn search_catalog(&self, query: &str) -> Result<Vec<NamedResource>, FetchError> {
        self.record(Endpoint::SearchCatalog);
        self.check_lists()?;
        Ok(filter_catalog(&self.catalog, query))
    }
}

/// Builds a Pokemon payload with the given types and flat stats.
pub fn pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| {
            serde_json::json!({
                "slot": i + 1,
                "type": { "name": t, "url": "" }
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 100,
        "types": types,
        "abilities": [],
        "stats": [],
        "sprites": { "front_default": null, "other": null },
        "species": {
            "name": name,
            "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)
        }
    }))
    .unwrap_or_else(|e| panic!("invalid fake pokemon payload: {}", e))
}

/// Builds a species payload with one English description and genus.
pub fn species(id: u32, name: &str, color: &str, description: &str, genus: &str) -> Species {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "color": { "name": color, "url": "" },
        "flavor_text_entries": [
            { "flavor_text": description, "language": { "name": "en", "url": "" }, "version": null }
        ],
        "genera": [
            { "genus": genus, "language": { "name": "en", "url": "" } }
        ]
    }))
    .unwrap_or_else(|e| panic!("invalid fake species payload: {}", e))
}
