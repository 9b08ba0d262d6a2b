//! Port trait for external leg distance/time providers

use async_trait::async_trait;
use meguri_core::models::{Coordinates, TransportMode};
use std::sync::Arc;
use thiserror::Error;

/// Distance and duration of one leg between consecutive stops.
///
/// Duration stays fractional here; the aggregator floors it to whole
/// minutes before summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub distance_km: f64,
    pub duration_minutes: f64,
}

/// Failure of a single leg computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("leg computation failed: {0}")]
pub struct ProviderError(pub String);

/// Port for computing one leg between two coordinates.
///
/// Implementations may be a straight-line estimate or a road-network
/// routing service; the aggregator does not distinguish.
#[async_trait]
pub trait LegProvider: Send + Sync {
    async fn leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<Leg, ProviderError>;
}

#[async_trait]
impl<T: LegProvider + ?Sized> LegProvider for Arc<T> {
    async fn leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<Leg, ProviderError> {
        (**self).leg(from, to, mode).await
    }
}

#[async_trait]
impl<T: LegProvider + ?Sized> LegProvider for &T {
    async fn leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<Leg, ProviderError> {
        (**self).leg(from, to, mode).await
    }
}
