//! Table row shapes for human-readable output

use meguri_core::models::{RankedCandidate, RoutePoint};
use tabled::Tabled;

#[derive(Tabled)]
pub struct CandidateRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Address")]
    pub address: String,
    #[tabled(rename = "Lat")]
    pub latitude: f64,
    #[tabled(rename = "Lng")]
    pub longitude: f64,
    #[tabled(rename = "Score")]
    pub score: u32,
}

impl CandidateRow {
    pub fn from_candidate(rank: usize, candidate: &RankedCandidate) -> Self {
        Self {
            rank,
            address: candidate.candidate.formatted_address.clone(),
            latitude: candidate.candidate.coordinates.latitude,
            longitude: candidate.candidate.coordinates.longitude,
            score: candidate.relevance_score,
        }
    }
}

#[derive(Tabled)]
pub struct RouteRow {
    #[tabled(rename = "#")]
    pub order: usize,
    #[tabled(rename = "Stop")]
    pub name: String,
    #[tabled(rename = "Leg (km)")]
    pub distance_km: String,
    #[tabled(rename = "Travel (min)")]
    pub travel_minutes: u32,
    #[tabled(rename = "Visit (min)")]
    pub visit_minutes: u32,
}

impl RouteRow {
    pub fn from_point(order: usize, point: &RoutePoint) -> Self {
        Self {
            order,
            name: point.name.clone(),
            distance_km: format!("{:.2}", point.distance_from_previous_km),
            travel_minutes: point.travel_time_from_previous_minutes,
            visit_minutes: point.visit_duration_minutes,
        }
    }
}
