//! The geocoding contract.

use serde::Serialize;

use crate::error::GeoError;

/// A resolved position, degrees (east and north positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Resolves free-text place names to coordinates.
///
/// Implementations must be safe to call from several threads at once.
pub trait GeoResolver: Send + Sync {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError>;
}

impl<R: GeoResolver + ?Sized> GeoResolver for &R {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError> {
        (**self).resolve(query)
    }
}

impl<R: GeoResolver + ?Sized> GeoResolver for Box<R> {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError> {
        (**self).resolve(query)
    }
}

/// Resolver that answers every query with the same point.
///
/// Used when coordinates are supplied directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedResolver(pub GeoPoint);

impl GeoResolver for FixedResolver {
    fn resolve(&self, _query: &str) -> Result<GeoPoint, GeoError> {
        Ok(self.0)
    }
}
