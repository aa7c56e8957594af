//! The aggregation service: turns one or more gateway calls into the view
//! shapes the adapters render.

use std::sync::Arc;

use futures::future::join_all;
use pokeapi_client::types::{NamedResource, Pokemon};

use crate::catalog::type_descriptors;
use crate::detail::{merge_detail, species_key, SpeciesLookup};
use crate::error::{FetchError, PokedexError};
use crate::gateway::FetchGateway;
use crate::pagination::{ListPage, PageRequest};
use crate::validation::normalize_key;
use crate::view::{DetailRecord, Summary, TypeDescriptor};

/// Maximum number of catalog matches a search returns.
pub const SEARCH_RESULT_LIMIT: u32 = 20;

/// Request-scoped aggregation over a [`FetchGateway`]. Holds no mutable
/// state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct PokedexService {
    gateway: Arc<dyn FetchGateway>,
}

impl PokedexService {
    pub fn new(gateway: Arc<dyn FetchGateway>) -> Self {
        Self { gateway }
    }

    /// Detail view for one Pokemon. `Ok(None)` when the upstream does not
    /// know the name or id. A failed species lookup degrades to default
    /// color, description and genus instead of failing the call.
    pub async fn format_detail(
        &self,
        name_or_id: &str,
    ) -> Result<Option<DetailRecord>, PokedexError> {
        let key = normalize_key(name_or_id);
        if key.is_empty() {
            return Ok(None);
        }
        let pokemon = match self.primary_entity(&key).await? {
            Some(pokemon) => pokemon,
            None => return Ok(None),
        };
        let species = self.lookup_species(&pokemon).await;
        Ok(Some(merge_detail(&pokemon, &species)))
    }

    /// One page of the full catalog. `total_count` is what the upstream
    /// reports, not the number of items on this page.
    pub async fn list_page(&self, request: PageRequest) -> Result<ListPage, PokedexError> {
        let list = self
            .gateway
            .fetch_entity_list(request.page_size, request.offset())
            .await?;
        let items = self.enrich(&list.results).await;
        Ok(ListPage::new(
            items,
            list.count,
            request.page,
            request.page_size,
        ))
    }

    /// Exact lookup first; only an upstream "not found" falls back to a
    /// substring search of the catalog.
    pub async fn search(&self, query: &str) -> Result<ListPage, PokedexError> {
        let key = normalize_key(query);
        if key.is_empty() {
            return Ok(ListPage::empty(SEARCH_RESULT_LIMIT));
        }

        if let Some(pokemon) = self.primary_entity(&key).await? {
            return Ok(ListPage::new(
                vec![Summary::from(&pokemon)],
                1,
                1,
                SEARCH_RESULT_LIMIT,
            ));
        }

        let mut matches = self.gateway.search_catalog(&key).await?;
        if matches.len() > SEARCH_RESULT_LIMIT as usize {
            tracing::debug!(
                "search '{}' matched {} entries, keeping the first {}",
                key,
                matches.len(),
                SEARCH_RESULT_LIMIT
            );
            matches.truncate(SEARCH_RESULT_LIMIT as usize);
        }
        let items = self.enrich(&matches).await;
        let total = items.len() as u32;
        Ok(ListPage::new(items, total, 1, SEARCH_RESULT_LIMIT))
    }

    /// Every gameplay type, pseudo-types removed.
    pub async fn list_types(&self) -> Result<Vec<TypeDescriptor>, PokedexError> {
        let types = self.gateway.fetch_all_types().await?;
        Ok(type_descriptors(&types))
    }

    /// Members of one type, paginated locally over the full membership list.
    /// `Ok(None)` when the type does not exist upstream.
    pub async fn list_by_type(
        &self,
        type_name: &str,
        request: PageRequest,
    ) -> Result<Option<ListPage>, PokedexError> {
        let key = normalize_key(type_name);
        if key.is_empty() {
            return Ok(None);
        }
        let members = match self.gateway.fetch_type_members(&key).await {
            Ok(members) => members,
            Err(FetchError::NotFound) => return Ok(None),
            Err(FetchError::Failure) => return Err(PokedexError::FetchFailure),
        };
        let items = self.enrich(request.slice(&members)).await;
        Ok(Some(ListPage::new(
            items,
            members.len() as u32,
            request.page,
            request.page_size,
        )))
    }

    async fn primary_entity(&self, key: &str) -> Result<Option<Pokemon>, PokedexError> {
        match self.gateway.fetch_entity(key).await {
            Ok(pokemon) => Ok(Some(pokemon)),
            Err(FetchError::NotFound) => Ok(None),
            Err(FetchError::Failure) => Err(PokedexError::FetchFailure),
        }
    }

    async fn lookup_species(&self, pokemon: &Pokemon) -> SpeciesLookup {
        let key = species_key(pokemon);
        match self.gateway.fetch_species(&key).await {
            Ok(species) => SpeciesLookup::Loaded(species),
            Err(e) => {
                tracing::warn!("species '{}' unavailable ({}), using defaults", key, e);
                SpeciesLookup::Unavailable
            }
        }
    }

    /// Resolves list entries to summaries concurrently, keeping input order.
    async fn enrich(&self, entries: &[NamedResource]) -> Vec<Summary> {
        join_all(entries.iter().map(|entry| self.summarize(entry)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn summarize(&self, entry: &NamedResource) -> Option<Summary> {
        match self.gateway.fetch_entity(&entry.name).await {
            Ok(pokemon) => Some(Summary::from(&pokemon)),
            Err(e) => {
                tracing::warn!("could not enrich '{}' ({})", entry.name, e);
                let summary = entry.id().map(|id| Summary::minimal(id, &entry.name));
                if summary.is_none() {
                    tracing::warn!("dropping '{}': no id in '{}'", entry.name, entry.url);
                }
                summary
            }
        }
    }
}
