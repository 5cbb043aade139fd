//! Note routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{ApiResult, AppState, middleware::CurrentUser};
use repairdesk_core::{Entity, NewNote, NotePatch, validate};
use repairdesk_db::{NoteRepository, entities::notes};
use repairdesk_shared::ListResponse;

/// Creates the note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{note_id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
}

/// Response for a note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    /// Note ID.
    pub id: Uuid,
    /// Author.
    pub creator_id: Uuid,
    /// Repair the note belongs to.
    pub repair_id: Uuid,
    /// Note body.
    pub text: String,
    /// When the note was written.
    pub created_at: DateTime<FixedOffset>,
    /// When the note was last edited.
    pub updated_at: DateTime<FixedOffset>,
}

impl From<notes::Model> for NoteResponse {
    fn from(note: notes::Model) -> Self {
        Self {
            id: note.id,
            creator_id: note.creator_id,
            repair_id: note.repair_id,
            text: note.text,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// POST /notes - Add a note as the current user.
async fn create_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewNote>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    validate(&payload)?;

    let note = NoteRepository::new(state.conn())
        .create(payload, user.id)
        .await?;

    info!(user_id = %user.id, note_id = %note.id, repair_id = %note.repair_id, "Note added");
    Ok((StatusCode::CREATED, Json(note.into())))
}

async fn list_notes(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<ListResponse<NoteResponse>>> {
    let notes = NoteRepository::new(state.conn()).list().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

async fn get_note(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<Json<NoteResponse>> {
    let note = NoteRepository::new(state.conn()).get(note_id).await?;
    Ok(Json(note.into()))
}

async fn update_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<Uuid>,
    Json(payload): Json<NotePatch>,
) -> ApiResult<Json<NoteResponse>> {
    validate(&payload)?;

    let note = NoteRepository::new(state.conn())
        .update(note_id, payload)
        .await?;

    info!(user_id = %user.id, note_id = %note.id, "Note edited");
    Ok(Json(note.into()))
}

async fn delete_note(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(note_id): Path<Uuid>,
) -> ApiResult<Json<NoteResponse>> {
    state.delete_policy.ensure_delete_allowed(Entity::Note)?;

    let note = NoteRepository::new(state.conn()).delete(note_id).await?;

    info!(user_id = %user.id, note_id = %note.id, "Note deleted");
    Ok(Json(note.into()))
}
