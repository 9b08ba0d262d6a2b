use meguri_core::models::{Coordinates, RouteStop, StartLocation, TransportMode};
use serde::Deserialize;

use crate::error::ApiError;

/// Query parameters for GET /api/geocode
#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    pub address: String,
}

/// The itinerary start point
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_start_name")]
    pub name: String,
}

fn default_start_name() -> String {
    "出発地".to_string()
}

/// One tourist spot to visit
#[derive(Debug, Deserialize)]
pub struct SpotRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub visit_duration_minutes: u32,
}

/// Request body for POST /api/route
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start: StartRequest,
    pub spots: Vec<SpotRequest>,
    #[serde(default)]
    pub transport_mode: TransportMode,
    #[serde(default = "default_true")]
    pub return_to_start: bool,
    /// Skip the routing service and estimate from straight-line distance
    #[serde(default)]
    pub use_fallback: bool,
}

fn default_true() -> bool {
    true
}

impl RouteRequest {
    /// Validate coordinates and build the ordered itinerary,
    /// start location first.
    pub fn to_stops(&self) -> Result<Vec<RouteStop>, ApiError> {
        let start_coords = Coordinates::try_new(self.start.lat, self.start.lng)
            .map_err(|e| ApiError::bad_request("Invalid start location").with_details(e.to_string()))?;
        let start = StartLocation::new(start_coords, &self.start.name);

        let mut stops = Vec::with_capacity(self.spots.len() + 1);
        stops.push(start.to_stop());

        for spot in &self.spots {
            let coordinates = Coordinates::try_new(spot.lat, spot.lng).map_err(|e| {
                ApiError::bad_request(format!("Invalid coordinates for spot '{}'", spot.name))
                    .with_details(e.to_string())
            })?;
            let mut stop = RouteStop::new(&spot.name, coordinates)
                .with_visit_duration(spot.visit_duration_minutes);
            if let Some(id) = &spot.id {
                stop = stop.with_id(id);
            }
            stops.push(stop);
        }

        Ok(stops)
    }
}
