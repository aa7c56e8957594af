//! Route handlers. Each one is a thin call into [`PokedexService`].

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use pokedex_lib::{DetailRecord, ListPage, PageRequest, PokedexService, TypeDescriptor};

use super::error::ApiError;

/// Query string as raw pairs. A typed struct would reject repeated keys
/// before the handler runs; here the first occurrence of a key wins.
type QueryPairs = Query<Vec<(String, String)>>;

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Raw `page`/`pageSize` values, coerced to defaults when malformed.
fn page_request(pairs: &[(String, String)]) -> PageRequest {
    PageRequest::from_raw(first(pairs, "page"), first(pairs, "pageSize"))
}

/// A path segment that cannot be decoded names nothing we could look up.
fn path_name(path: Result<Path<String>, PathRejection>, kind: &str) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => Err(ApiError::NotFound(format!(
            "{} not found: {}",
            kind,
            rejection.body_text()
        ))),
    }
}

pub async fn list_pokemon(
    State(service): State<PokedexService>,
    Query(pairs): QueryPairs,
) -> Result<Json<ListPage>, ApiError> {
    Ok(Json(service.list_page(page_request(&pairs)).await?))
}

pub async fn get_pokemon(
    State(service): State<PokedexService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DetailRecord>, ApiError> {
    let name = path_name(path, "Pokemon")?;
    service
        .format_detail(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Pokemon '{}' not found", name.trim())))
}

pub async fn search(
    State(service): State<PokedexService>,
    Query(pairs): QueryPairs,
) -> Result<Json<ListPage>, ApiError> {
    let query = first(&pairs, "q").unwrap_or_default();
    Ok(Json(service.search(query).await?))
}

pub async fn list_types(
    State(service): State<PokedexService>,
) -> Result<Json<Vec<TypeDescriptor>>, ApiError> {
    Ok(Json(service.list_types().await?))
}

pub async fn list_by_type(
    State(service): State<PokedexService>,
    path: Result<Path<String>, PathRejection>,
    Query(pairs): QueryPairs,
) -> Result<Json<ListPage>, ApiError> {
    let name = path_name(path, "Type")?;
    service
        .list_by_type(&name, page_request(&pairs))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Type '{}' not found", name.trim())))
}
