use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{debug, instrument};

use crate::{
    dto::{DeviceResponse, DevicesResponse, RegisterDeviceRequest, UpdateDeviceRequest},
    errors::ApiError,
    extract::JsonBody,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/devices",
            get(get_all_devices).post(register_device).put(update_device),
        )
        .route("/devices/update", post(update_device))
}

#[instrument(skip(state))]
async fn get_all_devices(State(state): State<AppState>) -> Result<Json<DevicesResponse>, ApiError> {
    let devices = state.devices.get_devices.get_all().await?;
    debug!(count = devices.len(), "Devices retrieved successfully");
    Ok(Json(DevicesResponse {
        devices: devices.into_iter().map(DeviceResponse::from_device).collect(),
    }))
}

/// Idempotent: an existing device is returned unchanged.
#[instrument(skip(state))]
async fn register_device(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterDeviceRequest>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device = state.devices.register_device.execute(&req.alias).await?;
    Ok(Json(DeviceResponse::from_device(device)))
}

#[instrument(skip(state))]
async fn update_device(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateDeviceRequest>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device = state
        .devices
        .update_device
        .execute(&req.alias, req.ip_address, req.owner)
        .await?;
    Ok(Json(DeviceResponse::from_device(device)))
}
