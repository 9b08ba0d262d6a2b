//! OSRM HTTP adapter for the [`LegProvider`] port

use async_trait::async_trait;
use meguri_core::models::{Coordinates, TransportMode};
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{Leg, LegProvider, ProviderError};

const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Leg provider backed by an OSRM `route/v1` endpoint.
///
/// One request per leg; OSRM reports metres and seconds, converted here
/// to kilometres and fractional minutes.
pub struct OsrmLegProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OsrmLegProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public demo server
    pub fn public_demo() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl LegProvider for OsrmLegProvider {
    async fn leg(
        &self,
        from: &Coordinates,
        to: &Coordinates,
        mode: TransportMode,
    ) -> Result<Leg, ProviderError> {
        // OSRM takes lng,lat pairs
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url.trim_end_matches('/'),
            mode.osrm_profile(),
            from.longitude,
            from.latitude,
            to.longitude,
            to.latitude,
        );

        tracing::debug!(url = %url, profile = mode.osrm_profile(), "osrm leg request");

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[("overview", "false"), ("steps", "false")])
            .send()
            .await
            .map_err(|e| ProviderError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError(format!("HTTP {} from routing service", status)));
        }

        let body: OsrmRouteResponse = response
            .json()
            .await
            .map_err(|e| ProviderError(format!("malformed routing response: {}", e)))?;

        leg_from_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// metres
    distance: f64,
    /// seconds
    duration: f64,
}

fn leg_from_response(body: OsrmRouteResponse) -> Result<Leg, ProviderError> {
    if body.code != "Ok" {
        return Err(ProviderError(format!("routing service returned code {}", body.code)));
    }
    let route = body
        .routes
        .first()
        .ok_or_else(|| ProviderError("no route found between stops".to_string()))?;

    Ok(Leg {
        distance_km: route.distance / 1000.0,
        duration_minutes: route.duration / 60.0,
    })
}
