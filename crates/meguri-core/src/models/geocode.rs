//! Geocoding result types

use super::location::Coordinates;
use serde::{Deserialize, Serialize};

/// One result from a geocoding lookup, already reshaped for display.
///
/// A candidate has no identity beyond its coordinates; two candidates
/// within [`super::DEDUP_EPSILON_DEG`] of each other are the same place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    pub coordinates: Coordinates,
    /// Raw provider display name (comma-separated, finest part first,
    /// terminating in a country name)
    pub display_name: String,
    /// Japanese-ordered rendering of `display_name`
    pub formatted_address: String,
}

/// A candidate annotated with its relevance to the query address.
///
/// The score orders results only; it is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: GeocodeCandidate,
    pub relevance_score: u32,
}
