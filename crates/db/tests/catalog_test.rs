//! Integration tests for the school, device and collection repositories.

mod common;

use repairdesk_core::{CollectionPatch, DevicePatch, NewCollection, RepairPatch, SchoolPatch};
use repairdesk_db::{
    CollectionRepository, DeviceRepository, RepairRepository, RepoError, SchoolRepository,
};
use uuid::Uuid;

#[tokio::test]
async fn test_school_create_and_get() {
    let db = common::setup().await;
    let repo = SchoolRepository::new(db.clone());

    let school = common::create_school(&db).await;
    let found = repo.get(school.id).await.expect("School should exist");

    assert_eq!(found, school);
    assert_eq!(repo.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_school_patch_changes_only_supplied_field() {
    let db = common::setup().await;
    let repo = SchoolRepository::new(db.clone());
    let school = common::create_school(&db).await;

    let updated = repo
        .update(
            school.id,
            SchoolPatch {
                contact_name: Some("Mr. Banda".to_string()),
                ..SchoolPatch::default()
            },
        )
        .await
        .expect("Failed to update school");

    assert_eq!(updated.contact_name, "Mr. Banda");
    assert_eq!(updated.name, school.name);
    assert_eq!(updated.address, school.address);
}

#[tokio::test]
async fn test_school_missing_is_not_found() {
    let db = common::setup().await;
    let repo = SchoolRepository::new(db);

    let result = repo.get(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound { entity: "School" })));

    let result = repo.update(Uuid::new_v4(), SchoolPatch::default()).await;
    assert!(matches!(result, Err(RepoError::NotFound { .. })));
}

#[tokio::test]
async fn test_referenced_school_and_device_cannot_be_deleted() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;

    let schools = SchoolRepository::new(db.clone());
    let result = schools.delete(repair.school_id).await;
    assert!(matches!(result, Err(RepoError::InUse { count: 1, .. })));
    assert!(schools.find_by_id(repair.school_id).await.unwrap().is_some());

    let devices = DeviceRepository::new(db.clone());
    let result = devices.delete(repair.device_model_id).await;
    assert!(matches!(result, Err(RepoError::InUse { count: 1, .. })));
}

#[tokio::test]
async fn test_unreferenced_school_delete_then_not_found() {
    let db = common::setup().await;
    let repo = SchoolRepository::new(db.clone());
    let school = common::create_school(&db).await;

    repo.delete(school.id).await.expect("Failed to delete school");

    assert!(matches!(
        repo.get(school.id).await,
        Err(RepoError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_device_update_and_list_order() {
    let db = common::setup().await;
    let repo = DeviceRepository::new(db.clone());
    let device = common::create_device(&db).await;

    let updated = repo
        .update(
            device.id,
            DevicePatch {
                model: Some("300e Chromebook".to_string()),
                ..DevicePatch::default()
            },
        )
        .await
        .expect("Failed to update device");
    assert_eq!(updated.manufacturer, "Lenovo");
    assert_eq!(updated.model, "300e Chromebook");

    let acer = repo
        .create(repairdesk_core::NewDevice {
            manufacturer: "Acer".to_string(),
            model: "Spin 511".to_string(),
        })
        .await
        .expect("Failed to create device");

    let listed = repo.list().await.expect("list");
    assert_eq!(listed.first().map(|d| d.id), Some(acer.id));
}

#[tokio::test]
async fn test_collection_patch_clears_location() {
    let db = common::setup().await;
    let repo = CollectionRepository::new(db.clone());

    let collection = repo
        .create(NewCollection {
            collection_number: "C-100".to_string(),
            origin: Some("Hillside Primary".to_string()),
            destination: Some("Depot".to_string()),
        })
        .await
        .expect("Failed to create collection");

    let updated = repo
        .update(
            collection.id,
            CollectionPatch {
                origin: Some(None),
                ..CollectionPatch::default()
            },
        )
        .await
        .expect("Failed to update collection");

    assert_eq!(updated.origin, None);
    assert_eq!(updated.destination.as_deref(), Some("Depot"));
    assert_eq!(updated.collection_number, "C-100");
}

#[tokio::test]
async fn test_collection_in_use_by_repair() {
    let db = common::setup().await;
    let repair = common::create_repair(&db).await;
    let collections = CollectionRepository::new(db.clone());

    let collection = collections
        .create(NewCollection {
            collection_number: "C-200".to_string(),
            origin: None,
            destination: None,
        })
        .await
        .expect("Failed to create collection");

    RepairRepository::new(db.clone())
        .update(
            repair.id,
            RepairPatch {
                outbound_collection_id: Some(Some(collection.id)),
                ..RepairPatch::default()
            },
        )
        .await
        .expect("Failed to assign collection");

    let result = collections.delete(collection.id).await;
    assert!(matches!(
        result,
        Err(RepoError::InUse {
            entity: "Collection",
            count: 1
        })
    ));
}
