//! Straight-line fallback leg provider

use async_trait::async_trait;
use geo::{Distance, Haversine, Point};
use meguri_core::models::{Coordinates, TransportMode};

use crate::ports::{Leg, LegProvider, ProviderError};

/// Great-circle distance inflated to approximate road distance.
/// 1.3 matches typical urban street-network detours.
pub const DEFAULT_ROAD_FACTOR: f64 = 1.3;

/// Leg provider estimating from great-circle distance.
///
/// Distance is haversine × road factor; duration comes from the
/// transport mode's assumed speed. Never fails, which makes it the
/// natural fallback when a routing service is down.
#[derive(Debug, Clone)]
pub struct HaversineLegProvider {
    road_factor: f64,
}

impl HaversineLegProvider {
    pub fn new() -> Self {
        Self { road_factor: DEFAULT_ROAD_FACTOR }
    }

    pub fn with_road_factor(road_factor: f64) -> Self {
        Self { road_factor }
    }
}

impl Default for HaversineLegProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LegProvider for HaversineLegProvider {
    async fn leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<Leg, ProviderError> {
        let from_point = Point::new(from.longitude, from.latitude);
        let to_point = Point::new(to.longitude, to.latitude);

        let distance_km = Haversine.distance(from_point, to_point) / 1000.0 * self.road_factor;
        let duration_minutes = distance_km / mode.fallback_speed_kmh() * 60.0;

        Ok(Leg { distance_km, duration_minutes })
    }
}
