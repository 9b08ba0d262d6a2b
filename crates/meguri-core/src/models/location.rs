//! Coordinate and start-location types.
//!
//! Everything here is a transient value type: created per user action
//! (one geocode request, one route generation) and discarded with the
//! session state. Nothing carries cross-session identity.

use crate::error::{MeguriError, Result};
use serde::{Deserialize, Serialize};

/// Two geocoding results closer than this (in degrees, ~11 m) are treated
/// as the same place when merging candidate lookups.
pub const DEDUP_EPSILON_DEG: f64 = 1e-4;

/// A WGS 84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create coordinates, rejecting values outside the valid WGS 84 range
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(MeguriError::InvalidCoordinates { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    /// True if both axes differ by less than `epsilon_deg` degrees
    pub fn is_near(&self, other: &Coordinates, epsilon_deg: f64) -> bool {
        (self.latitude - other.latitude).abs() < epsilon_deg
            && (self.longitude - other.longitude).abs() < epsilon_deg
    }
}

/// Where a route-planning session departs from.
///
/// Built from device geolocation, a free-text search selection, a fixed
/// preset, or a map click; held in caller-owned session state only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartLocation {
    pub coordinates: Coordinates,
    pub label: String,
}

impl StartLocation {
    pub fn new(coordinates: Coordinates, label: impl Into<String>) -> Self {
        Self { coordinates, label: label.into() }
    }

    /// Convert into the leading stop of an itinerary (zero visit time)
    pub fn to_stop(&self) -> super::route::RouteStop {
        super::route::RouteStop::new(self.label.clone(), self.coordinates)
    }
}
