//! Repair routes, including the note thread and the workflow shortcuts.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::notes::NoteResponse;
use crate::{ApiResult, AppState, middleware::CurrentUser};
use repairdesk_core::{
    CollectionAssignment, Entity, NewRepair, RepairPatch, RepairStatus, RepairStatusChange,
    validate,
};
use repairdesk_db::{
    NoteRepository, RepairFilter, RepairRepository, entities::repairs,
};
use repairdesk_shared::ListResponse;

/// Creates the repair routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/repairs", get(list_repairs).post(create_repair))
        .route(
            "/repairs/{repair_id}",
            get(get_repair).patch(update_repair).delete(delete_repair),
        )
        .route("/repairs/{repair_id}/notes", get(list_repair_notes))
        .route("/repairs/{repair_id}/status", post(change_status))
        .route("/repairs/{repair_id}/collections", post(assign_collections))
}

/// Query parameters for listing repairs.
#[derive(Debug, Default, Deserialize)]
pub struct ListRepairsQuery {
    /// Maximum number of repairs, newest first.
    pub limit: Option<u64>,
    /// Filter by state.
    pub status: Option<RepairStatus>,
    /// Filter by school.
    pub school_id: Option<Uuid>,
}

impl From<ListRepairsQuery> for RepairFilter {
    fn from(query: ListRepairsQuery) -> Self {
        Self {
            status: query.status,
            school_id: query.school_id,
            limit: query.limit,
        }
    }
}

/// Response for a repair.
#[derive(Debug, Clone, Serialize)]
pub struct RepairResponse {
    /// Repair ID.
    pub id: Uuid,
    /// Lifecycle state.
    pub status: RepairStatus,
    /// User who raised the repair.
    pub creator_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<FixedOffset>,
    /// When the record last changed.
    pub updated_at: DateTime<FixedOffset>,
    /// Day the fault was reported.
    pub date_raised: NaiveDate,
    /// Day the repair was closed.
    pub date_closed: Option<NaiveDate>,
    /// Owning school.
    pub school_id: Uuid,
    /// Device serial number.
    pub device_serial: String,
    /// Device catalog entry.
    pub device_model_id: Uuid,
    /// Whether the device arrived in a protective case.
    pub has_protective_case: bool,
    /// Whether the service-level target was missed.
    pub is_sla_breached: bool,
    /// External ticket number.
    pub external_ticket_number: Option<String>,
    /// Collection bringing the device in.
    pub inbound_collection_id: Option<Uuid>,
    /// Collection returning the device.
    pub outbound_collection_id: Option<Uuid>,
    /// Day the device came in.
    pub inbound_date: Option<NaiveDate>,
    /// Day the device went back.
    pub outbound_date: Option<NaiveDate>,
}

impl From<repairs::Model> for RepairResponse {
    fn from(repair: repairs::Model) -> Self {
        Self {
            id: repair.id,
            status: repair.status.into(),
            creator_id: repair.creator_id,
            created_at: repair.created_at,
            updated_at: repair.updated_at,
            date_raised: repair.date_raised,
            date_closed: repair.date_closed,
            school_id: repair.school_id,
            device_serial: repair.device_serial,
            device_model_id: repair.device_model_id,
            has_protective_case: repair.has_protective_case,
            is_sla_breached: repair.is_sla_breached,
            external_ticket_number: repair.external_ticket_number,
            inbound_collection_id: repair.inbound_collection_id,
            outbound_collection_id: repair.outbound_collection_id,
            inbound_date: repair.inbound_date,
            outbound_date: repair.outbound_date,
        }
    }
}

/// POST /repairs - Raise a repair as the current user.
async fn create_repair(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewRepair>,
) -> ApiResult<(StatusCode, Json<RepairResponse>)> {
    validate(&payload)?;

    let repair = RepairRepository::new(state.conn())
        .create(payload, user.id)
        .await?;

    info!(
        user_id = %user.id,
        repair_id = %repair.id,
        school_id = %repair.school_id,
        "Repair raised"
    );
    Ok((StatusCode::CREATED, Json(repair.into())))
}

/// GET /repairs - List repairs, newest first.
async fn list_repairs(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListRepairsQuery>,
) -> ApiResult<Json<ListResponse<RepairResponse>>> {
    let repairs = RepairRepository::new(state.conn())
        .list(query.into())
        .await?;
    Ok(Json(repairs.into_iter().map(RepairResponse::from).collect()))
}

/// GET /repairs/{repair_id}
async fn get_repair(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(repair_id): Path<Uuid>,
) -> ApiResult<Json<RepairResponse>> {
    let repair = RepairRepository::new(state.conn()).get(repair_id).await?;
    Ok(Json(repair.into()))
}

async fn apply_patch(
    state: &AppState,
    user_id: Uuid,
    repair_id: Uuid,
    patch: RepairPatch,
) -> ApiResult<Json<RepairResponse>> {
    validate(&patch)?;

    let repair = RepairRepository::new(state.conn())
        .update(repair_id, patch)
        .await?;

    info!(
        user_id = %user_id,
        repair_id = %repair.id,
        status = %RepairStatus::from(repair.status),
        "Repair updated"
    );
    Ok(Json(repair.into()))
}

/// PATCH /repairs/{repair_id} - Update the supplied fields.
async fn update_repair(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(repair_id): Path<Uuid>,
    Json(payload): Json<RepairPatch>,
) -> ApiResult<Json<RepairResponse>> {
    apply_patch(&state, user.id, repair_id, payload).await
}

/// POST /repairs/{repair_id}/status - Move a repair to another state.
async fn change_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(repair_id): Path<Uuid>,
    Json(payload): Json<RepairStatusChange>,
) -> ApiResult<Json<RepairResponse>> {
    apply_patch(&state, user.id, repair_id, payload.into()).await
}

/// POST /repairs/{repair_id}/collections - Attach inbound/outbound collections.
async fn assign_collections(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(repair_id): Path<Uuid>,
    Json(payload): Json<CollectionAssignment>,
) -> ApiResult<Json<RepairResponse>> {
    apply_patch(&state, user.id, repair_id, payload.into()).await
}

/// DELETE /repairs/{repair_id} - Delete a repair and its notes.
async fn delete_repair(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(repair_id): Path<Uuid>,
) -> ApiResult<Json<RepairResponse>> {
    state.delete_policy.ensure_delete_allowed(Entity::Repair)?;

    let repair = RepairRepository::new(state.conn()).delete(repair_id).await?;

    info!(user_id = %user.id, repair_id = %repair.id, "Repair deleted");
    Ok(Json(repair.into()))
}

/// GET /repairs/{repair_id}/notes - The repair's note thread, oldest first.
async fn list_repair_notes(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(repair_id): Path<Uuid>,
) -> ApiResult<Json<ListResponse<NoteResponse>>> {
    RepairRepository::new(state.conn()).get(repair_id).await?;

    let notes = NoteRepository::new(state.conn())
        .list_for_repair(repair_id)
        .await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}
