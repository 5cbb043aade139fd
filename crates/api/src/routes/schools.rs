//! School routes.

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
use repairdesk_core::{Entity, NewSchool, SchoolPatch, validate};
use repairdesk_db::{SchoolRepository, entities::schools};
use repairdesk_shared::ListResponse;

/// Creates the school routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schools", get(list_schools).post(create_school))
        .route(
            "/schools/{school_id}",
            get(get_school).patch(update_school).delete(delete_school),
        )
}

/// Response for a school.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolResponse {
    /// School ID.
    pub id: Uuid,
    /// School name.
    pub name: String,
    /// Contact person.
    pub contact_name: String,
    /// Postal address.
    pub address: String,
}

impl From<schools::Model> for SchoolResponse {
    fn from(school: schools::Model) -> Self {
        Self {
            id: school.id,
            name: school.name,
            contact_name: school.contact_name,
            address: school.address,
        }
    }
}

/// POST /schools - Create a school.
async fn create_school(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewSchool>,
) -> ApiResult<(StatusCode, Json<SchoolResponse>)> {
    validate(&payload)?;

    let school = SchoolRepository::new(state.conn()).create(payload).await?;

    info!(user_id = %user.id, school_id = %school.id, "School created");
    Ok((StatusCode::CREATED, Json(school.into())))
}

/// GET /schools - List schools.
async fn list_schools(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<ListResponse<SchoolResponse>>> {
    let schools = SchoolRepository::new(state.conn()).list().await?;
    Ok(Json(schools.into_iter().map(SchoolResponse::from).collect()))
}

/// GET /schools/{school_id} - Get a school.
async fn get_school(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(school_id): Path<Uuid>,
) -> ApiResult<Json<SchoolResponse>> {
    let school = SchoolRepository::new(state.conn()).get(school_id).await?;
    Ok(Json(school.into()))
}

/// PATCH /schools/{school_id} - Update the supplied fields.
async fn update_school(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(school_id): Path<Uuid>,
    Json(payload): Json<SchoolPatch>,
) -> ApiResult<Json<SchoolResponse>> {
    validate(&payload)?;

    let school = SchoolRepository::new(state.conn())
        .update(school_id, payload)
        .await?;

    info!(user_id = %user.id, school_id = %school.id, "School updated");
    Ok(Json(school.into()))
}

/// DELETE /schools/{school_id} - Delete an unreferenced school.
async fn delete_school(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(school_id): Path<Uuid>,
) -> ApiResult<Json<SchoolResponse>> {
    state.delete_policy.ensure_delete_allowed(Entity::School)?;

    let school = SchoolRepository::new(state.conn()).delete(school_id).await?;

    info!(user_id = %user.id, school_id = %school.id, "School deleted");
    Ok(Json(school.into()))
}
