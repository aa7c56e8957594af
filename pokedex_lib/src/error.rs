//! Error types for the library layer.

use std::fmt;

/// Errors surfaced by the aggregation service.
///
/// "Not found" is never an error at this level: primary lookups that come
/// back absent turn into `None` or an empty page.
#[derive(Debug)]
pub enum PokedexError {
    /// The upstream could not be reached or answered with a fault. The
    /// underlying detail is logged where it happens and not carried here.
    FetchFailure,
    /// Configuration or user-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailure => write!(f, "Failed to fetch data from the upstream API"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PokedexError {}

/// Outcome of a single gateway call that did not produce a payload.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// The upstream reported the resource as absent.
    #[error("Resource not found")]
    NotFound,
    /// Transport or server fault.
    #[error("Fetch failed")]
    Failure,
}

impl From<pokeapi_client::Error> for FetchError {
    fn from(e: pokeapi_client::Error) -> Self {
        match e {
            pokeapi_client::Error::NotFound => Self::NotFound,
            pokeapi_client::Error::RequestFailed
            | pokeapi_client::Error::HttpStatus { .. }
            | pokeapi_client::Error::ClientBuild(_) => Self::Failure,
        }
    }
}

/// Client construction happens before any request, so its failure is a
/// local setup problem rather than an upstream fault.
pub(crate) fn setup_error(e: pokeapi_client::Error) -> PokedexError {
    match e {
        pokeapi_client::Error::ClientBuild(msg) => PokedexError::InvalidInput(msg),
        other => PokedexError::InvalidInput(other.to_string()),
    }
}

impl From<FetchError> for PokedexError {
    /// Used on paths where the upstream has no legitimate "absent" answer
    /// (catalog listings), so a 404 there is an upstream fault as well.
    fn from(_: FetchError) -> Self {
        Self::FetchFailure
    }
}
