//! Route aggregation: stops in, annotated points and summary out

use meguri_core::models::{RoutePoint, RouteStop, RouteSummary, TransportMode};

use crate::error::RouteError;
use crate::models::PlannedRoute;
use crate::ports::LegProvider;

/// Name given to the synthetic closing stop of a looped route
pub const RETURN_TO_START_LABEL: &str = "return to start";

/// Builds a [`PlannedRoute`] from an ordered itinerary.
///
/// Legs are computed sequentially in stop-index order through the
/// injected provider. Any leg failure fails the whole aggregation;
/// dropping the future cancels it with no partial output.
pub struct RouteAggregator<P: LegProvider> {
    provider: P,
}

impl<P: LegProvider> RouteAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Aggregate an itinerary. `stops[0]` must be the start location.
    ///
    /// When `return_to_start` is set and the last stop does not already
    /// sit on the start's coordinates, a synthetic closing stop is
    /// appended. Fractional leg minutes are floored before summation so
    /// the summary total is the exact sum of the per-point values.
    pub async fn aggregate(
        &self,
        stops: &[RouteStop],
        mode: TransportMode,
        return_to_start: bool,
    ) -> Result<PlannedRoute, RouteError> {
        if stops.is_empty() {
            return Err(RouteError::EmptyItinerary);
        }

        let mut itinerary: Vec<RouteStop> = stops.to_vec();
        let origin = itinerary[0].coordinates;
        let needs_closing_stop = return_to_start
            && itinerary.last().map(|last| last.coordinates != origin).unwrap_or(false);
        if needs_closing_stop {
            itinerary.push(RouteStop::new(RETURN_TO_START_LABEL, origin));
        }

        let mut points = Vec::with_capacity(itinerary.len());
        points.push(RoutePoint::origin(&itinerary[0]));

        let mut total_travel_time_minutes: u32 = 0;
        let mut total_distance_km: f64 = 0.0;

        for pair in itinerary.windows(2) {
            let leg = self
                .provider
                .leg(&pair[0].coordinates, &pair[1].coordinates, mode)
                .await
                .map_err(|e| RouteError::Provider { reason: e.to_string() })?;

            // keep travel time additive in whole minutes
            let minutes = leg.duration_minutes.floor() as u32;
            total_travel_time_minutes += minutes;
            total_distance_km += leg.distance_km;

            points.push(RoutePoint::from_stop(&pair[1], leg.distance_km, minutes));
        }

        let closes_on_start = itinerary.len() > 1
            && itinerary.last().map(|last| last.coordinates == origin).unwrap_or(false);
        let mut total_stops = itinerary.len() - 1;
        if return_to_start && closes_on_start {
            total_stops -= 1;
        }

        let total_visit_time_minutes =
            itinerary.iter().map(|stop| stop.visit_duration_minutes).sum();

        let summary = RouteSummary {
            total_stops,
            total_travel_time_minutes,
            total_visit_time_minutes,
            total_distance_km,
            returns_to_start: return_to_start,
        };

        tracing::debug!(
            stops = summary.total_stops,
            travel_minutes = summary.total_travel_time_minutes,
            distance_km = summary.total_distance_km,
            "route aggregated"
        );

        Ok(PlannedRoute { points, summary })
    }
}
