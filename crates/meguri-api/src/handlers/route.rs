use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use meguri_route::{RouteAggregator, RouteError};

use crate::dto::{RouteRequest, RouteResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn handle_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        spots = request.spots.len(),
        mode = %request.transport_mode,
        return_to_start = request.return_to_start,
        use_fallback = request.use_fallback,
        "Processing route request"
    );

    let stops = request.to_stops()?;
    let mode = request.transport_mode;

    if request.use_fallback {
        let aggregator = RouteAggregator::new(state.fallback_provider.clone());
        let route = aggregator.aggregate(&stops, mode, request.return_to_start).await?;
        return Ok(Json(RouteResponse {
            points: route.points,
            summary: route.summary,
            transport_mode: mode,
            fallback_used: true,
        }));
    }

    let aggregator = RouteAggregator::new(state.router_provider.clone());
    match aggregator.aggregate(&stops, mode, request.return_to_start).await {
        Ok(route) => Ok(Json(RouteResponse {
            points: route.points,
            summary: route.summary,
            transport_mode: mode,
            fallback_used: false,
        })),
        // Routing service down: degrade to the straight-line estimate
        // instead of failing the whole request.
        Err(RouteError::Provider { reason }) => {
            tracing::warn!(reason = %reason, "routing service failed, using fallback estimate");
            let fallback = RouteAggregator::new(state.fallback_provider.clone());
            let route = fallback.aggregate(&stops, mode, request.return_to_start).await?;
            Ok(Json(RouteResponse {
                points: route.points,
                summary: route.summary,
                transport_mode: mode,
                fallback_used: true,
            }))
        }
        Err(other) => Err(other.into()),
    }
}
