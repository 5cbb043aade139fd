//! Dashboard page and the HTMX fragments behind it.
//!
//! Mutations answer with a notice fragment. A successful one also carries
//! `HX-Trigger: refresh-{entity}` so the entity's table reloads; refused
//! ones (validation, conflicts, disabled deletes) render an error notice
//! with status 200 and no trigger.

use std::collections::HashMap;

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get},
};
use chrono::NaiveDate;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    ApiError, ApiResult, AppState,
    middleware::CurrentUser,
    views::{Notice, pages, tables},
};
use repairdesk_core::{
    Entity, NewCollection, NewDevice, NewNote, NewRepair, NewSchool, validate,
};
use repairdesk_db::{
    CollectionRepository, DeviceRepository, NoteRepository, RepairFilter, RepairRepository,
    SchoolRepository,
};
use repairdesk_shared::{AppError, ListQuery};

type FormFields = HashMap<String, String>;

/// Creates the page and fragment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/ui/{entity}", get(list_fragment).post(create_fragment))
        .route("/ui/{entity}/{id}", delete(delete_fragment))
}

fn parse_entity(name: &str) -> ApiResult<Entity> {
    Entity::from_plural(name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section '{name}'")).into())
}

/// GET / - The dashboard, or a redirect to the login page.
async fn index(
    State(state): State<AppState>,
    user: Result<CurrentUser, ApiError>,
) -> ApiResult<Response> {
    let Ok(CurrentUser(user)) = user else {
        return Ok(Redirect::to("/auth/login?next=/").into_response());
    };

    let name = if user.full_name.is_empty() {
        &user.username
    } else {
        &user.full_name
    };
    Ok(Html(pages::index_page(&state.app, name)?).into_response())
}

/// GET /ui/{entity} - Table fragment.
async fn list_fragment(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(name): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Html<String>> {
    let db = state.conn();

    let html = match parse_entity(&name)? {
        Entity::School => tables::schools_table(&SchoolRepository::new(db).list().await?)?,
        Entity::Device => tables::devices_table(&DeviceRepository::new(db).list().await?)?,
        Entity::Collection => {
            tables::collections_table(&CollectionRepository::new(db).list().await?)?
        }
        Entity::Repair => {
            let repairs = RepairRepository::new(db.clone())
                .list(RepairFilter {
                    limit: query.limit,
                    ..RepairFilter::default()
                })
                .await?;
            let schools = SchoolRepository::new(db.clone())
                .list()
                .await?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect();
            let devices = DeviceRepository::new(db)
                .list()
                .await?
                .into_iter()
                .map(|d| (d.id, format!("{} {}", d.manufacturer, d.model)))
                .collect();
            tables::repairs_table(&repairs, &schools, &devices)?
        }
        Entity::Note => tables::notes_table(&NoteRepository::new(db).list().await?)?,
    };

    Ok(Html(html))
}

/// POST /ui/{entity} - Create from a form submission.
async fn create_fragment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(name): Path<String>,
    Form(form): Form<FormFields>,
) -> ApiResult<Notice> {
    let entity = parse_entity(&name)?;

    let notice = match create_entity(&state, entity, &form, user.id).await {
        Ok(id) => {
            info!(user_id = %user.id, entity = entity.plural(), id = %id, "Created from form");
            Notice::success(entity, format!("{} created", entity.label()))
        }
        Err(e) => refused(&e),
    };
    Ok(notice)
}

/// DELETE /ui/{entity}/{id} - Delete from a table row.
async fn delete_fragment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((name, id)): Path<(String, Uuid)>,
) -> ApiResult<Notice> {
    let entity = parse_entity(&name)?;

    let notice = match delete_entity(&state, entity, id).await {
        Ok(()) => {
            info!(user_id = %user.id, entity = entity.plural(), id = %id, "Deleted from table");
            Notice::success(entity, format!("{} deleted", entity.label()))
        }
        Err(e) => refused(&e),
    };
    Ok(notice)
}

fn refused(err: &ApiError) -> Notice {
    if err.inner().is_server_error() {
        error!(error = %err.inner(), "fragment mutation failed");
    }
    Notice::error(err.public_message())
}

async fn create_entity(
    state: &AppState,
    entity: Entity,
    form: &FormFields,
    user_id: Uuid,
) -> ApiResult<Uuid> {
    let db = state.conn();

    let id = match entity {
        Entity::School => {
            let input = NewSchool {
                name: text(form, "name"),
                contact_name: text(form, "contact_name"),
                address: text(form, "address"),
            };
            validate(&input)?;
            SchoolRepository::new(db).create(input).await?.id
        }
        Entity::Device => {
            let input = NewDevice {
                manufacturer: text(form, "manufacturer"),
                model: text(form, "model"),
            };
            validate(&input)?;
            DeviceRepository::new(db).create(input).await?.id
        }
        Entity::Collection => {
            let input = NewCollection {
                collection_number: text(form, "collection_number"),
                origin: optional_text(form, "origin"),
                destination: optional_text(form, "destination"),
            };
            validate(&input)?;
            CollectionRepository::new(db).create(input).await?.id
        }
        Entity::Repair => {
            let input = NewRepair {
                date_raised: date(form, "date_raised")?,
                school_id: id_field(form, "school_id")?,
                device_serial: text(form, "device_serial"),
                device_model_id: id_field(form, "device_model_id")?,
                has_protective_case: form.contains_key("has_protective_case"),
                external_ticket_number: optional_text(form, "external_ticket_number"),
            };
            validate(&input)?;
            RepairRepository::new(db).create(input, user_id).await?.id
        }
        Entity::Note => {
            let input = NewNote {
                repair_id: id_field(form, "repair_id")?,
                text: text(form, "text"),
            };
            validate(&input)?;
            NoteRepository::new(db).create(input, user_id).await?.id
        }
    };

    Ok(id)
}

async fn delete_entity(state: &AppState, entity: Entity, id: Uuid) -> ApiResult<()> {
    state.delete_policy.ensure_delete_allowed(entity)?;

    let db = state.conn();
    match entity {
        Entity::School => SchoolRepository::new(db).delete(id).await.map(drop)?,
        Entity::Device => DeviceRepository::new(db).delete(id).await.map(drop)?,
        Entity::Collection => CollectionRepository::new(db).delete(id).await.map(drop)?,
        Entity::Repair => RepairRepository::new(db).delete(id).await.map(drop)?,
        Entity::Note => NoteRepository::new(db).delete(id).await.map(drop)?,
    }
    Ok(())
}

fn text(form: &FormFields, name: &str) -> String {
    form.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn optional_text(form: &FormFields, name: &str) -> Option<String> {
    Some(text(form, name)).filter(|v| !v.is_empty())
}

fn id_field(form: &FormFields, name: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(&text(form, name))
        .map_err(|_| AppError::Validation(format!("{name}: not a valid id")).into())
}

fn date(form: &FormFields, name: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(&text(form, name), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{name}: expected YYYY-MM-DD")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_blank_optional_text_is_none() {
        let fields = form(&[("origin", "  "), ("destination", "Depot")]);
        assert_eq!(optional_text(&fields, "origin"), None);
        assert_eq!(optional_text(&fields, "destination").as_deref(), Some("Depot"));
        assert_eq!(optional_text(&fields, "missing"), None);
    }

    #[test]
    fn test_field_parsing_errors_are_validation() {
        let fields = form(&[("school_id", "abc"), ("date_raised", "14/03/2025")]);

        let err = id_field(&fields, "school_id").unwrap_err();
        assert_eq!(err.inner().status_code(), 422);

        let err = date(&fields, "date_raised").unwrap_err();
        assert_eq!(err.inner().message(), "date_raised: expected YYYY-MM-DD");
    }

    #[test]
    fn test_unknown_section() {
        assert!(parse_entity("widgets").is_err());
        assert_eq!(parse_entity("notes").unwrap(), Entity::Note);
    }
}
