//! HTTP client for the PokeAPI v2 REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ListQuery, Query},
    types::{NamedResourceList, Pokemon, Species, TypeDetail},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Request timeout used unless the caller configures one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the PokeAPI v2 REST API.
///
/// A 404 from any endpoint is reported as [`Error::NotFound`] so callers can
/// tell an absent resource apart from an upstream fault.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://pokeapi.co/api/v2`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL and per-request timeout.
    pub fn with_config(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured API root.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, segments: &[&str], query: Option<&impl Query>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of the Pokemon catalog.
    pub async fn get_pokemon_list(&self, query: &ListQuery) -> Result<NamedResourceList, Error> {
        self.get::<NamedResourceList, ListQuery>(&["pokemon"], Some(query))
            .await
    }

    /// Fetches a single Pokemon by name or numeric id.
    pub async fn get_pokemon(&self, key: &str) -> Result<Pokemon, Error> {
        if key.is_empty() {
            return Err(Error::NotFound);
        }
        self.get::<Pokemon, ListQuery>(&["pokemon", key], None)
            .await
    }

    /// Fetches a species record by name or numeric id.
    pub async fn get_species(&self, key: &str) -> Result<Species, Error> {
        if key.is_empty() {
            return Err(Error::NotFound);
        }
        self.get::<Species, ListQuery>(&["pokemon-species", key], None)
            .await
    }

    /// Fetches one page of the type catalog.
    pub async fn get_types(&self, query: &ListQuery) -> Result<NamedResourceList, Error> {
        self.get::<NamedResourceList, ListQuery>(&["type"], Some(query))
            .await
    }

    /// Fetches a type together with its full membership list.
    pub async fn get_type(&self, name: &str) -> Result<TypeDetail, Error> {
        if name.is_empty() {
            return Err(Error::NotFound);
        }
        self.get::<TypeDetail, ListQuery>(&["type", name], None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
