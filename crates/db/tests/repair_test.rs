//! Integration tests for the repair and note repositories.

mod common;

use chrono::NaiveDate;
use repairdesk_core::{NewNote, NotePatch, RepairPatch, RepairStatus, RepairStatusChange};
use repairdesk_db::entities::sea_orm_active_enums;
use repairdesk_db::{NoteRepository, RepairFilter, RepairRepository, RepoError};
use uuid::Uuid;

#[tokio::test]
async fn test_repair_create_defaults() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;

    assert_eq!(repair.status, sea_orm_active_enums::RepairStatus::Open);
    assert!(!repair.is_sla_breached);
    assert!(repair.has_protective_case);
    assert_eq!(repair.date_closed, None);

    let found = RepairRepository::new(db.clone())
        .get(repair.id)
        .await
        .expect("Repair should exist");
    assert_eq!(found, repair);
}

#[tokio::test]
async fn test_repair_requires_existing_school() {
    let db = common::setup().await;
    let user = common::create_user(&db).await;
    let device = common::create_device(&db).await;

    let result = RepairRepository::new(db.clone())
        .create(common::new_repair(Uuid::new_v4(), device.id, "SN-9"), user.id)
        .await;

    assert!(matches!(
        result,
        Err(RepoError::MissingReference {
            entity: "School",
            ..
        })
    ));
}

#[tokio::test]
async fn test_repair_list_newest_first_with_limit_and_filter() {
    let db = common::setup().await;
    let user = common::create_user(&db).await;
    let school = common::create_school(&db).await;
    let device = common::create_device(&db).await;
    let repo = RepairRepository::new(db.clone());

    let mut ids = Vec::new();
    for serial in ["SN-1", "SN-2", "SN-3"] {
        let repair = repo
            .create(common::new_repair(school.id, device.id, serial), user.id)
            .await
            .expect("Failed to create repair");
        ids.push(repair.id);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let all = repo.list(RepairFilter::default()).await.expect("list");
    let listed: Vec<Uuid> = all.iter().map(|r| r.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);

    let limited = repo
        .list(RepairFilter {
            limit: Some(2),
            ..RepairFilter::default()
        })
        .await
        .expect("list");
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].device_serial, "SN-3");

    repo.update(
        ids[2],
        RepairStatusChange {
            status: RepairStatus::Closed,
            date_closed: NaiveDate::from_ymd_opt(2025, 4, 1),
        }
        .into(),
    )
    .await
    .expect("Failed to close repair");

    let closed = repo
        .list(RepairFilter {
            status: Some(RepairStatus::Closed),
            ..RepairFilter::default()
        })
        .await
        .expect("list");
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].device_serial, "SN-1");
    assert_eq!(closed[0].date_closed, NaiveDate::from_ymd_opt(2025, 4, 1));
}

#[tokio::test]
async fn test_repair_patch_changes_only_supplied_field() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;

    let updated = RepairRepository::new(db.clone())
        .update(
            repair.id,
            RepairPatch {
                is_sla_breached: Some(true),
                ..RepairPatch::default()
            },
        )
        .await
        .expect("Failed to update repair");

    assert!(updated.is_sla_breached);
    assert_eq!(updated.device_serial, repair.device_serial);
    assert_eq!(updated.status, repair.status);
    assert_eq!(updated.school_id, repair.school_id);
    assert_eq!(updated.created_at, repair.created_at);
}

#[tokio::test]
async fn test_repair_patch_rejects_unknown_collection() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;

    let result = RepairRepository::new(db.clone())
        .update(
            repair.id,
            RepairPatch {
                inbound_collection_id: Some(Some(Uuid::new_v4())),
                ..RepairPatch::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(RepoError::MissingReference {
            entity: "Collection",
            ..
        })
    ));
}

#[tokio::test]
async fn test_note_thread_and_repair_delete() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;
    let notes = NoteRepository::new(db.clone());

    for text in ["Screen cracked", "Part ordered"] {
        notes
            .create(
                NewNote {
                    repair_id: repair.id,
                    text: text.to_string(),
                },
                repair.creator_id,
            )
            .await
            .expect("Failed to create note");
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let thread = notes.list_for_repair(repair.id).await.expect("list");
    let texts: Vec<&str> = thread.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, ["Screen cracked", "Part ordered"]);

    let edited = notes
        .update(
            thread[1].id,
            NotePatch {
                text: Some("Part arrived".to_string()),
            },
        )
        .await
        .expect("Failed to update note");
    assert_eq!(edited.text, "Part arrived");
    assert_eq!(edited.repair_id, repair.id);

    let repairs = RepairRepository::new(db.clone());
    repairs.delete(repair.id).await.expect("Failed to delete repair");

    assert!(notes.list().await.expect("list").is_empty());
    assert!(matches!(
        repairs.get(repair.id).await,
        Err(RepoError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_note_requires_existing_repair() {
    let db = common::setup().await;
    let user = common::create_user(&db).await;

    let result = NoteRepository::new(db.clone())
        .create(
            NewNote {
                repair_id: Uuid::new_v4(),
                text: "orphan".to_string(),
            },
            user.id,
        )
        .await;

    assert!(matches!(
        result,
        Err(RepoError::MissingReference {
            entity: "Repair",
            ..
        })
    ));
}
