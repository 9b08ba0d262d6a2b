//! Itinerary types: stops, annotated route points, and the derived summary

use crate::error::MeguriError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::location::Coordinates;

/// How the visitor travels between stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walking,
    Cycling,
    Driving,
}

impl TransportMode {
    /// Assumed speed for straight-line leg estimates, in km/h
    pub fn fallback_speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Walking => 4.0,
            TransportMode::Cycling => 15.0,
            TransportMode::Driving => 40.0,
        }
    }

    /// Profile segment understood by OSRM `route/v1/{profile}` endpoints
    pub fn osrm_profile(&self) -> &'static str {
        match self {
            TransportMode::Walking => "foot",
            TransportMode::Cycling => "bike",
            TransportMode::Driving => "car",
        }
    }
}

impl FromStr for TransportMode {
    type Err = MeguriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(TransportMode::Walking),
            "cycling" => Ok(TransportMode::Cycling),
            "driving" => Ok(TransportMode::Driving),
            other => Err(MeguriError::UnknownTransportMode { value: other.to_string() }),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Driving => "driving",
        };
        f.write_str(s)
    }
}

/// One stop on an itinerary: a tourist spot, or the synthetic start/end
/// point. Ordering is significant; index 0 is always the start location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// Backend spot ID, absent for synthetic stops
    pub id: Option<String>,
    pub name: String,
    pub coordinates: Coordinates,
    pub visit_duration_minutes: u32,
}

impl RouteStop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: None,
            name: name.into(),
            coordinates,
            visit_duration_minutes: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_visit_duration(mut self, minutes: u32) -> Self {
        self.visit_duration_minutes = minutes;
        self
    }
}

/// A [`RouteStop`] enriched with the leg that reaches it.
///
/// The first point of a route always carries zero distance and time
/// (it has no predecessor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: Option<String>,
    pub name: String,
    pub coordinates: Coordinates,
    pub visit_duration_minutes: u32,
    pub distance_from_previous_km: f64,
    pub travel_time_from_previous_minutes: u32,
}

impl RoutePoint {
    /// Wrap the itinerary's first stop (no inbound leg)
    pub fn origin(stop: &RouteStop) -> Self {
        Self::from_stop(stop, 0.0, 0)
    }

    pub fn from_stop(stop: &RouteStop, distance_km: f64, travel_time_minutes: u32) -> Self {
        Self {
            id: stop.id.clone(),
            name: stop.name.clone(),
            coordinates: stop.coordinates,
            visit_duration_minutes: stop.visit_duration_minutes,
            distance_from_previous_km: distance_km,
            travel_time_from_previous_minutes: travel_time_minutes,
        }
    }
}

/// Aggregate over all points of a generated route.
///
/// Recomputed whole on every (re)generation, never mutated incrementally.
/// Distances stay in floating-point kilometers; rounding is left to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Stops actually visited: excludes the start point and, when the
    /// route loops back, the closing duplicate of the start
    pub total_stops: usize,
    pub total_travel_time_minutes: u32,
    pub total_visit_time_minutes: u32,
    pub total_distance_km: f64,
    pub returns_to_start: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_round_trip() {
        for mode in [TransportMode::Walking, TransportMode::Cycling, TransportMode::Driving] {
            let parsed: TransportMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_transport_mode_rejects_unknown() {
        assert!("teleport".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_transport_mode_osrm_profiles() {
        assert_eq!(TransportMode::Walking.osrm_profile(), "foot");
        assert_eq!(TransportMode::Cycling.osrm_profile(), "bike");
        assert_eq!(TransportMode::Driving.osrm_profile(), "car");
    }

    #[test]
    fn test_route_stop_builder() {
        let stop = RouteStop::new("としまえん跡地", Coordinates::new(35.742, 139.648))
            .with_id("spot-42")
            .with_visit_duration(45);

        assert_eq!(stop.id.as_deref(), Some("spot-42"));
        assert_eq!(stop.visit_duration_minutes, 45);
    }

    #[test]
    fn test_origin_point_has_no_leg() {
        let stop = RouteStop::new("出発地", Coordinates::new(35.0, 139.0));
        let point = RoutePoint::origin(&stop);

        assert_eq!(point.distance_from_previous_km, 0.0);
        assert_eq!(point.travel_time_from_previous_minutes, 0);
        assert_eq!(point.name, "出発地");
    }

    #[test]
    fn test_transport_mode_serde_lowercase() {
        let json = serde_json::to_string(&TransportMode::Cycling).unwrap();
        assert_eq!(json, "\"cycling\"");
        let parsed: TransportMode = serde_json::from_str("\"driving\"").unwrap();
        assert_eq!(parsed, TransportMode::Driving);
    }
}
