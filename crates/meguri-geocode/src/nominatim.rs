//! Nominatim HTTP adapter for the [`GeocodeLookup`] port

use async_trait::async_trait;
use meguri_core::models::Coordinates;
use serde::Deserialize;
use std::time::Duration;

use crate::ports::{GeocodeLookup, LookupError, RawPlace};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Geocoding lookup backed by a Nominatim-compatible search endpoint.
///
/// Nominatim's usage policy requires an identifying User-Agent; the
/// resolver's throttle keeps consecutive queries spaced out.
pub struct NominatimLookup {
    base_url: String,
    user_agent: String,
    limit: usize,
    country_codes: Option<String>,
    client: reqwest::Client,
}

impl NominatimLookup {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: user_agent.into(),
            limit: 5,
            country_codes: Some("jp".to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public openstreetmap.org instance
    pub fn openstreetmap(user_agent: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, user_agent)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict results to the given ISO country codes (None lifts the
    /// default `jp` restriction)
    pub fn with_country_codes(mut self, codes: Option<String>) -> Self {
        self.country_codes = codes;
        self
    }
}

#[async_trait]
impl GeocodeLookup for NominatimLookup {
    async fn search(&self, query: &str) -> Result<Vec<RawPlace>, LookupError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let limit = self.limit.to_string();

        let mut request = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ]);

        if let Some(codes) = &self.country_codes {
            request = request.query(&[("countrycodes", codes.as_str())]);
        }

        tracing::debug!(query = %query, url = %url, "nominatim search");

        let response = request
            .send()
            .await
            .map_err(|e| LookupError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError(format!("HTTP {} from geocoder", status)));
        }

        let raw: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| LookupError(format!("malformed geocoder response: {}", e)))?;

        into_places(raw)
    }
}

/// The subset of a Nominatim search result this crate consumes.
/// Coordinates arrive as strings on the wire.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

fn into_places(raw: Vec<NominatimPlace>) -> Result<Vec<RawPlace>, LookupError> {
    raw.into_iter()
        .map(|p| {
            let latitude = p
                .lat
                .parse::<f64>()
                .map_err(|_| LookupError(format!("invalid latitude '{}'", p.lat)))?;
            let longitude = p
                .lon
                .parse::<f64>()
                .map_err(|_| LookupError(format!("invalid longitude '{}'", p.lon)))?;
            let coordinates = Coordinates::try_new(latitude, longitude)
                .map_err(|e| LookupError(e.to_string()))?;
            Ok(RawPlace { coordinates, display_name: p.display_name })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "place_id": 1,
            "lat": "35.7356",
            "lon": "139.6517",
            "display_name": "練馬, 練馬区, 東京都, 日本",
            "class": "place",
            "type": "suburb"
        },
        {
            "place_id": 2,
            "lat": "35.7483",
            "lon": "139.6566",
            "display_name": "豊玉北, 練馬区, 東京都, 日本"
        }
    ]"#;

    #[test]
    fn test_parses_string_coordinates() {
        let raw: Vec<NominatimPlace> = serde_json::from_str(SAMPLE).unwrap();
        let places = into_places(raw).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].coordinates.latitude, 35.7356);
        assert_eq!(places[0].coordinates.longitude, 139.6517);
        assert_eq!(places[0].display_name, "練馬, 練馬区, 東京都, 日本");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw: Result<Vec<NominatimPlace>, _> = serde_json::from_str(SAMPLE);
        assert!(raw.is_ok());
    }

    #[test]
    fn test_unparseable_coordinate_is_an_error() {
        let raw = vec![NominatimPlace {
            lat: "north".to_string(),
            lon: "139.0".to_string(),
            display_name: "x".to_string(),
        }];
        assert!(into_places(raw).is_err());
    }

    #[test]
    fn test_out_of_range_coordinate_is_an_error() {
        let raw = vec![NominatimPlace {
            lat: "95.0".to_string(),
            lon: "139.0".to_string(),
            display_name: "x".to_string(),
        }];
        assert!(into_places(raw).is_err());
    }

    #[test]
    fn test_default_builder() {
        let lookup = NominatimLookup::openstreetmap("meguri-test/0.1");
        assert_eq!(lookup.base_url, DEFAULT_BASE_URL);
        assert_eq!(lookup.limit, 5);
        assert_eq!(lookup.country_codes.as_deref(), Some("jp"));
    }
}
