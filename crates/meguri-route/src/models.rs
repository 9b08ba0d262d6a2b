//! Aggregation output types

use meguri_core::models::{RoutePoint, RouteSummary};
use serde::{Deserialize, Serialize};

/// A fully aggregated route: ordered annotated points plus the derived
/// summary. Either complete or absent; no partial routes exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub points: Vec<RoutePoint>,
    pub summary: RouteSummary,
}
