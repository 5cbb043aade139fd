//! Table fragments listing each entity.

use std::collections::HashMap;

use serde::Serialize;

use repairdesk_core::Entity;
use repairdesk_db::entities::{collections, devices, notes, repairs, schools};
use uuid::Uuid;

use super::{ViewError, render};

#[derive(Serialize)]
struct Row {
    delete_url: String,
    confirm: String,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct Table<'a> {
    plural: &'static str,
    headers: &'a [&'a str],
    colspan: usize,
    rows: Vec<Row>,
}

fn table(
    entity: Entity,
    headers: &[&str],
    rows: Vec<(Uuid, Vec<String>)>,
) -> Result<String, ViewError> {
    let plural = entity.plural();
    let confirm = format!("Delete this {}?", entity.label().to_lowercase());
    let rows = rows
        .into_iter()
        .map(|(id, cells)| Row {
            delete_url: format!("/ui/{plural}/{id}"),
            confirm: confirm.clone(),
            cells,
        })
        .collect();

    render(
        "table",
        &Table {
            plural,
            headers,
            colspan: headers.len() + 1,
            rows,
        },
    )
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Schools table.
pub fn schools_table(items: &[schools::Model]) -> Result<String, ViewError> {
    let rows: Vec<_> = items
        .iter()
        .map(|s| {
            (
                s.id,
                vec![
                    s.name.clone(),
                    s.contact_name.clone(),
                    s.address.clone(),
                    s.id.to_string(),
                ],
            )
        })
        .collect();
    table(Entity::School, &["Name", "Contact", "Address", "Id"], rows)
}

/// Device catalog table.
pub fn devices_table(items: &[devices::Model]) -> Result<String, ViewError> {
    let rows: Vec<_> = items
        .iter()
        .map(|d| {
            (
                d.id,
                vec![d.manufacturer.clone(), d.model.clone(), d.id.to_string()],
            )
        })
        .collect();
    table(Entity::Device, &["Manufacturer", "Model", "Id"], rows)
}

/// Collections table.
pub fn collections_table(items: &[collections::Model]) -> Result<String, ViewError> {
    let rows: Vec<_> = items
        .iter()
        .map(|c| {
            (
                c.id,
                vec![
                    c.collection_number.clone(),
                    optional(c.origin.as_deref()),
                    optional(c.destination.as_deref()),
                    c.id.to_string(),
                ],
            )
        })
        .collect();
    table(
        Entity::Collection,
        &["Number", "Origin", "Destination", "Id"],
        rows,
    )
}

/// Repairs table. School and device ids are shown by name when known.
pub fn repairs_table(
    items: &[repairs::Model],
    school_names: &HashMap<Uuid, String>,
    device_names: &HashMap<Uuid, String>,
) -> Result<String, ViewError> {
    let rows: Vec<_> = items
        .iter()
        .map(|r| {
            let status: repairdesk_core::RepairStatus = r.status.into();
            (
                r.id,
                vec![
                    r.date_raised.to_string(),
                    status.to_string(),
                    school_names
                        .get(&r.school_id)
                        .cloned()
                        .unwrap_or_else(|| r.school_id.to_string()),
                    device_names
                        .get(&r.device_model_id)
                        .cloned()
                        .unwrap_or_else(|| r.device_model_id.to_string()),
                    r.device_serial.clone(),
                    optional(r.external_ticket_number.as_deref()),
                    r.id.to_string(),
                ],
            )
        })
        .collect();
    table(
        Entity::Repair,
        &["Raised", "Status", "School", "Device", "Serial", "Ticket", "Id"],
        rows,
    )
}

/// Notes table.
pub fn notes_table(items: &[notes::Model]) -> Result<String, ViewError> {
    let rows: Vec<_> = items
        .iter()
        .map(|n| {
            (
                n.id,
                vec![
                    n.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    n.repair_id.to_string(),
                    n.text.clone(),
                ],
            )
        })
        .collect();
    table(Entity::Note, &["Written", "Repair", "Text"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_escaped() {
        let school = schools::Model {
            id: Uuid::new_v4(),
            name: "<i>Hill</i>".to_string(),
            contact_name: "A & B".to_string(),
            address: "1 Road".to_string(),
        };

        let html = schools_table(&[school.clone()]).unwrap();
        assert!(html.contains("&lt;i&gt;Hill&lt;/i&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains(&format!(r#"hx-delete="/ui/schools/{}""#, school.id)));
        assert!(html.contains(r#"hx-confirm="Delete this school?""#));
        assert!(!html.contains("No schools yet"));
    }

    #[test]
    fn test_empty_table_placeholder() {
        let html = devices_table(&[]).unwrap();
        assert!(html.contains(r#"<td colspan="4">No devices yet</td>"#));
    }
}
