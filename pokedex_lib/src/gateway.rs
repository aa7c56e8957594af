//! The fetch gateway: every upstream call the aggregation layer makes goes
//! through [`FetchGateway`].

use async_trait::async_trait;
use pokeapi_client::types::{NamedResource, NamedResourceList, Pokemon, Species};
use pokeapi_client::{Client, ListQuery};

use crate::catalog::filter_catalog;
use crate::config::Config;
use crate::error::{setup_error, FetchError, PokedexError};
use crate::validation::normalize_key;

/// Enough to cover every type in one request; the upstream pages at 20.
const TYPE_LIST_LIMIT: u32 = 100;

/// Remote lookups consumed by the service. Implementations map an absent
/// resource to [`FetchError::NotFound`] and every other fault to
/// [`FetchError::Failure`].
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// One page of the entity catalog plus the upstream total.
    async fn fetch_entity_list(&self, limit: u32, offset: u32)
        -> Result<NamedResourceList, FetchError>;

    /// A single entity by name (case-insensitive) or numeric id.
    async fn fetch_entity(&self, key: &str) -> Result<Pokemon, FetchError>;

    /// A species record by name or id.
    async fn fetch_species(&self, key: &str) -> Result<Species, FetchError>;

    /// Every type the upstream knows, pseudo-types included.
    async fn fetch_all_types(&self) -> Result<Vec<NamedResource>, FetchError>;

    /// Full membership list of one type.
    async fn fetch_type_members(&self, type_name: &str)
        -> Result<Vec<NamedResource>, FetchError>;

    /// Catalog entries whose name contains `query`, case-insensitively, in
    /// catalog order.
    async fn search_catalog(&self, query: &str) -> Result<Vec<NamedResource>, FetchError>;
}

/// [`FetchGateway`] backed by the PokeAPI HTTP client.
pub struct ApiGateway {
    client: Client,
    catalog_limit: u32,
}

impl ApiGateway {
    /// Builds the HTTP client from validated configuration.
    pub fn new(config: &Config) -> Result<Self, PokedexError> {
        config.validate()?;
        let client =
            Client::with_config(&config.base_url, config.timeout).map_err(setup_error)?;
        Ok(Self {
            client,
            catalog_limit: config.catalog_limit,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl FetchGateway for ApiGateway {
    async fn fetch_entity_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<NamedResourceList, FetchError> {
        let query = ListQuery::default().with_limit(limit).with_offset(offset);
        Ok(self.client.get_pokemon_list(&query).await?)
    }

    async fn fetch_entity(&self, key: &str) -> Result<Pokemon, FetchError> {
        Ok(self.client.get_pokemon(&normalize_key(key)).await?)
    }

    async fn fetch_species(&self, key: &str) -> Result<Species, FetchError> {
        Ok(self.client.get_species(&normalize_key(key)).await?)
    }

    async fn fetch_all_types(&self) -> Result<Vec<NamedResource>, FetchError> {
        let query = ListQuery::default().with_limit(TYPE_LIST_LIMIT);
        let list = self.client.get_types(&query).await?;
        if list.next.is_some() {
            tracing::warn!(
                "type list truncated at {} of {} entries",
                list.results.len(),
                list.count
            );
        }
        Ok(list.results)
    }

    async fn fetch_type_members(
        &self,
        type_name: &str,
    ) -> Result<Vec<NamedResource>, FetchError> {
        let detail = self.client.get_type(&normalize_key(type_name)).await?;
        Ok(detail.pokemon.into_iter().map(|m| m.pokemon).collect())
    }

    async fn search_catalog(&self, query: &str) -> Result<Vec<NamedResource>, FetchError> {
        let list_query = ListQuery::default()
            .with_limit(self.catalog_limit)
            .with_offset(0);
        let catalog = self.client.get_pokemon_list(&list_query).await?;
        if catalog.count > self.catalog_limit {
            tracing::warn!(
                "catalog search covers {} of {} entries; raise POKEDEX_CATALOG_LIMIT",
                self.catalog_limit,
                catalog.count
            );
        }
        Ok(filter_catalog(&catalog.results, query))
    }
}
