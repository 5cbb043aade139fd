//! Device catalog routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{ApiResult, AppState, middleware::CurrentUser};
use repairdesk_core::{Entity, NewDevice, DevicePatch, validate};
use repairdesk_db::{DeviceRepository, entities::devices};
use repairdesk_shared::ListResponse;

/// Creates the device routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(list_devices).post(create_device))
        .route(
            "/devices/{device_id}",
            get(get_device).patch(update_device).delete(delete_device),
        )
}

/// Response for a device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceResponse {
    /// Device ID.
    pub id: Uuid,
    /// Manufacturer.
    pub manufacturer: String,
    /// Model name.
    pub model: String,
}

impl From<devices::Model> for DeviceResponse {
    fn from(device: devices::Model) -> Self {
        Self {
            id: device.id,
            manufacturer: device.manufacturer,
            model: device.model,
        }
    }
}

/// POST /devices - Create a device.
async fn create_device(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewDevice>,
) -> ApiResult<(StatusCode, Json<DeviceResponse>)> {
    validate(&payload)?;

    let device = DeviceRepository::new(state.conn()).create(payload).await?;

    info!(user_id = %user.id, device_id = %device.id, "Device created");
    Ok((StatusCode::CREATED, Json(device.into())))
}

/// GET /devices - List devices.
async fn list_devices(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<ListResponse<DeviceResponse>>> {
    let devices = DeviceRepository::new(state.conn()).list().await?;
    Ok(Json(devices.into_iter().map(DeviceResponse::from).collect()))
}

/// GET /devices/{device_id} - Get a device.
async fn get_device(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(device_id): Path<Uuid>,
) -> ApiResult<Json<DeviceResponse>> {
    let device = DeviceRepository::new(state.conn()).get(device_id).await?;
    Ok(Json(device.into()))
}

/// PATCH /devices/{device_id} - Update the supplied fields.
async fn update_device(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(device_id): Path<Uuid>,
    Json(payload): Json<DevicePatch>,
) -> ApiResult<Json<DeviceResponse>> {
    validate(&payload)?;

    let device = DeviceRepository::new(state.conn())
        .update(device_id, payload)
        .await?;

    info!(user_id = %user.id, device_id = %device.id, "Device updated");
    Ok(Json(device.into()))
}

/// DELETE /devices/{device_id} - Delete an unreferenced device.
async fn delete_device(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(device_id): Path<Uuid>,
) -> ApiResult<Json<DeviceResponse>> {
    state.delete_policy.ensure_delete_allowed(Entity::Device)?;

    let device = DeviceRepository::new(state.conn()).delete(device_id).await?;

    info!(user_id = %user.id, device_id = %device.id, "Device deleted");
    Ok(Json(device.into()))
}
