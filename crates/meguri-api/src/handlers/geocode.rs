use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::dto::{GeocodeParams, GeocodeResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn handle_geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeParams>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(address = %params.address, "Processing geocode request");

    let results = state.resolver.resolve(&params.address).await?;

    Ok(Json(GeocodeResponse {
        query: params.address,
        results,
    }))
}
