//! Collection routes.

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
use repairdesk_core::{Entity, NewCollection, CollectionPatch, validate};
use repairdesk_db::{CollectionRepository, entities::collections};
use repairdesk_shared::ListResponse;

/// Creates the collection routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(list_collections).post(create_collection))
        .route(
            "/collections/{collection_id}",
            get(get_collection).patch(update_collection).delete(delete_collection),
        )
}

/// Response for a collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    /// Collection ID.
    pub id: Uuid,
    /// Courier reference.
    pub collection_number: String,
    /// Pickup location.
    pub origin: Option<String>,
    /// Drop-off location.
    pub destination: Option<String>,
}

impl From<collections::Model> for CollectionResponse {
    fn from(collection: collections::Model) -> Self {
        Self {
            id: collection.id,
            collection_number: collection.collection_number,
            origin: collection.origin,
            destination: collection.destination,
        }
    }
}

/// POST /collections - Create a collection.
async fn create_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<NewCollection>,
) -> ApiResult<(StatusCode, Json<CollectionResponse>)> {
    validate(&payload)?;

    let collection = CollectionRepository::new(state.conn()).create(payload).await?;

    info!(user_id = %user.id, collection_id = %collection.id, "Collection created");
    Ok((StatusCode::CREATED, Json(collection.into())))
}

/// GET /collections - List collections.
async fn list_collections(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<ListResponse<CollectionResponse>>> {
    let collections = CollectionRepository::new(state.conn()).list().await?;
    Ok(Json(collections.into_iter().map(CollectionResponse::from).collect()))
}

/// GET /collections/{collection_id} - Get a collection.
async fn get_collection(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(collection_id): Path<Uuid>,
) -> ApiResult<Json<CollectionResponse>> {
    let collection = CollectionRepository::new(state.conn()).get(collection_id).await?;
    Ok(Json(collection.into()))
}

/// PATCH /collections/{collection_id} - Update the supplied fields.
async fn update_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(collection_id): Path<Uuid>,
    Json(payload): Json<CollectionPatch>,
) -> ApiResult<Json<CollectionResponse>> {
    validate(&payload)?;

    let collection = CollectionRepository::new(state.conn())
        .update(collection_id, payload)
        .await?;

    info!(user_id = %user.id, collection_id = %collection.id, "Collection updated");
    Ok(Json(collection.into()))
}

/// DELETE /collections/{collection_id} - Delete an unreferenced collection.
async fn delete_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(collection_id): Path<Uuid>,
) -> ApiResult<Json<CollectionResponse>> {
    state.delete_policy.ensure_delete_allowed(Entity::Collection)?;

    let collection = CollectionRepository::new(state.conn()).delete(collection_id).await?;

    info!(user_id = %user.id, collection_id = %collection.id, "Collection deleted");
    Ok(Json(collection.into()))
}
