//! Geocoding for birth places.
//!
//! This crate provides:
//! - The [`GeoResolver`] contract and its error taxonomy
//! - A blocking Nominatim client with a bounded request timeout
//! - [`CachedResolver`], an LRU memo shareable across threads

pub mod cache;
pub mod config;
pub mod error;
pub mod nominatim;
pub mod resolver;

pub use cache::CachedResolver;
pub use config::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, GeocoderConfig,
};
pub use error::GeoError;
pub use nominatim::{NominatimClient, parse_search_response};
pub use resolver::{FixedResolver, GeoPoint, GeoResolver};

/// Nominatim client behind an LRU memo, both configured from `config`.
pub fn cached_nominatim(config: &GeocoderConfig) -> Result<CachedResolver<NominatimClient>, GeoError> {
    Ok(CachedResolver::new(
        NominatimClient::new(config)?,
        config.cache_capacity,
    ))
}
