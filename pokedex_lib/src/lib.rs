//! Library layer for the Pokedex: a fetch gateway over PokeAPI and the
//! aggregation service that turns raw payloads into display-ready records.
//!
//! The service is written against the [`FetchGateway`] trait; production
//! code plugs in [`ApiGateway`], tests plug in an in-memory fake.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fake;
pub mod gateway;
pub mod pagination;
pub mod service;
pub mod validation;
pub mod view;

pub use pokeapi_client;
pub use pokeapi_client::types;

pub use config::Config;
pub use error::{FetchError, PokedexError};
pub use gateway::{ApiGateway, FetchGateway};
pub use pagination::{ListPage, PageRequest};
pub use service::PokedexService;
pub use view::{AbilityView, DetailRecord, StatView, Summary, TypeDescriptor};
