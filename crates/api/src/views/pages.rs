//! Full HTML pages.

use serde::Serialize;

use repairdesk_core::Entity;
use repairdesk_shared::config::AppInfo;

use super::{ViewError, refresh_event, render};

#[derive(Serialize)]
struct Layout<'a> {
    title: &'a str,
    name: &'a str,
    version: &'a str,
    body: String,
}

fn layout(app: &AppInfo, title: &str, body: String) -> Result<String, ViewError> {
    render(
        "layout",
        &Layout {
            title,
            name: &app.name,
            version: &app.version,
            body,
        },
    )
}

#[derive(Serialize)]
struct Login<'a> {
    next: String,
    error: Option<&'a str>,
}

/// The sign-in page. `next` is echoed into the form action.
pub fn login_page(app: &AppInfo, next: &str, error: Option<&str>) -> Result<String, ViewError> {
    let body = render(
        "login",
        &Login {
            next: urlencoding::encode(next).into_owned(),
            error,
        },
    )?;
    layout(app, "Sign in", body)
}

/// One input of a dashboard create form.
#[derive(Debug, Clone, Copy, Serialize)]
struct Field {
    name: &'static str,
    label: &'static str,
    kind: Option<&'static str>,
    required: bool,
    checkbox: bool,
    maxlength: Option<u32>,
}

impl Field {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: None,
            required: true,
            checkbox: false,
            maxlength: None,
        }
    }

    const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: Some("date"),
            ..Self::text(name, label)
        }
    }

    const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            checkbox: true,
            required: false,
            ..Self::text(name, label)
        }
    }

    const fn max(self, maxlength: u32) -> Self {
        Self {
            maxlength: Some(maxlength),
            ..self
        }
    }
}

#[derive(Serialize)]
struct Section {
    plural: &'static str,
    title: &'static str,
    event: String,
    fields: &'static [Field],
}

#[derive(Serialize)]
struct Index<'a> {
    name: &'a str,
    user: &'a str,
    sections: Vec<Section>,
}

/// The dashboard: one section per entity, each with a create form and a
/// table that reloads on its refresh event.
pub fn index_page(app: &AppInfo, user_name: &str) -> Result<String, ViewError> {
    let sections = [
        Entity::Repair,
        Entity::Note,
        Entity::School,
        Entity::Device,
        Entity::Collection,
    ]
    .into_iter()
    .map(|entity| Section {
        plural: entity.plural(),
        title: section_title(entity),
        event: refresh_event(entity),
        fields: form_fields(entity),
    })
    .collect();

    let body = render(
        "index",
        &Index {
            name: &app.name,
            user: user_name,
            sections,
        },
    )?;
    layout(app, "Dashboard", body)
}

const fn section_title(entity: Entity) -> &'static str {
    match entity {
        Entity::School => "Schools",
        Entity::Device => "Devices",
        Entity::Collection => "Collections",
        Entity::Repair => "Repairs",
        Entity::Note => "Notes",
    }
}

const SCHOOL_FIELDS: &[Field] = &[
    Field::text("name", "Name"),
    Field::text("contact_name", "Contact"),
    Field::text("address", "Address"),
];

const DEVICE_FIELDS: &[Field] = &[
    Field::text("manufacturer", "Manufacturer"),
    Field::text("model", "Model"),
];

const COLLECTION_FIELDS: &[Field] = &[
    Field::text("collection_number", "Collection #"),
    Field::text("origin", "Origin").optional(),
    Field::text("destination", "Destination").optional(),
];

const REPAIR_FIELDS: &[Field] = &[
    Field::date("date_raised", "Raised"),
    Field::text("school_id", "School id"),
    Field::text("device_model_id", "Device id"),
    Field::text("device_serial", "Serial"),
    Field::text("external_ticket_number", "Ticket #").optional(),
    Field::checkbox("has_protective_case", "Case"),
];

const NOTE_FIELDS: &[Field] = &[
    Field::text("repair_id", "Repair id"),
    Field::text("text", "Note").max(2000),
];

const fn form_fields(entity: Entity) -> &'static [Field] {
    match entity {
        Entity::School => SCHOOL_FIELDS,
        Entity::Device => DEVICE_FIELDS,
        Entity::Collection => COLLECTION_FIELDS,
        Entity::Repair => REPAIR_FIELDS,
        Entity::Note => NOTE_FIELDS,
    }
}
