//! JSON HTTP adapter over [`PokedexService`].

mod error;
mod handlers;

use axum::routing::get;
use axum::Router;
use pokedex_lib::PokedexService;
use tower_http::trace::TraceLayer;

/// Builds the API router around a shared service.
pub fn router(service: PokedexService) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/pokemon", get(handlers::list_pokemon))
        .route("/api/pokemon/{name}", get(handlers::get_pokemon))
        .route("/api/search", get(handlers::search))
        .route("/api/types", get(handlers::list_types))
        .route("/api/types/{name}", get(handlers::list_by_type))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
