use meguri_core::models::{RankedCandidate, RoutePoint, RouteSummary, TransportMode};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "meguri-api" }
    }
}

/// Geocoding response: ranked candidates for one address
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub query: String,
    pub results: Vec<RankedCandidate>,
}

/// Route response: annotated points plus the derived summary
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub points: Vec<RoutePoint>,
    pub summary: RouteSummary,
    pub transport_mode: TransportMode,
    /// True when legs came from the straight-line estimator rather
    /// than the routing service
    pub fallback_used: bool,
}
