//! Port trait for external geocoding lookups

use async_trait::async_trait;
use meguri_core::models::Coordinates;
use std::sync::Arc;
use thiserror::Error;

/// One raw result from a geocoding provider: coordinates plus the
/// provider's comma-separated display name (finest part first, ending in
/// the country). Wire-level details stay behind the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlace {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Failure of a single lookup call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("geocode lookup failed: {0}")]
pub struct LookupError(pub String);

/// Port for querying an external geocoding service
#[async_trait]
pub trait GeocodeLookup: Send + Sync {
    /// Search the provider for a single query string.
    ///
    /// Returns zero or more raw places; an empty vector is a miss, not an
    /// error.
    async fn search(&self, query: &str) -> Result<Vec<RawPlace>, LookupError>;
}

#[async_trait]
impl<T: GeocodeLookup + ?Sized> GeocodeLookup for Arc<T> {
    async fn search(&self, query: &str) -> Result<Vec<RawPlace>, LookupError> {
        (**self).search(query).await
    }
}

#[async_trait]
impl<T: GeocodeLookup + ?Sized> GeocodeLookup for &T {
    async fn search(&self, query: &str) -> Result<Vec<RawPlace>, LookupError> {
        (**self).search(query).await
    }
}
