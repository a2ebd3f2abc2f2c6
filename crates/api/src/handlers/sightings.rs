use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use knockknock_domain::DomainError;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::{
    dto::{
        RecordSightingRequest, SightingResponse, SightingSummaryResponse, SightingWindowRequest,
        SightingsResponse,
    },
    errors::ApiError,
    extract::JsonBody,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/sightings", get(get_sightings).post(record_sighting))
}

/// The window comes from the query string; older clients send it as a JSON body.
fn window_request(
    params: &HashMap<String, String>,
    body: &[u8],
) -> Result<SightingWindowRequest, DomainError> {
    let from_query = SightingWindowRequest::from_query(params);
    if !from_query.is_empty() || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(from_query);
    }
    serde_json::from_slice(body)
        .map_err(|e| DomainError::Validation(format!("invalid window body: {}", e)))
}

#[instrument(skip(state, body))]
async fn get_sightings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<SightingsResponse>, ApiError> {
    let window = window_request(&params, &body)?.into_window()?;
    let sightings = state.sightings.get_sightings.execute(window).await?;
    debug!(count = sightings.len(), "Sightings retrieved successfully");
    Ok(Json(SightingsResponse {
        sightings: sightings
            .into_iter()
            .map(SightingSummaryResponse::from)
            .collect(),
    }))
}

#[instrument(skip(state))]
async fn record_sighting(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RecordSightingRequest>,
) -> Result<Json<SightingResponse>, ApiError> {
    let timestamp = req.timestamp.to_epoch("timestamp")?;
    let sighting = state
        .sightings
        .record_sighting
        .execute(&req.alias, timestamp)
        .await?;
    Ok(Json(SightingResponse::from_sighting(sighting)))
}
