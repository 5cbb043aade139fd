//! Shared setup for repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use repairdesk_core::{NewDevice, NewRepair, NewSchool, NewUser};
use repairdesk_db::entities::{devices, repairs, schools, users};
use repairdesk_db::{
    DeviceRepository, RepairRepository, SchoolRepository, UserRepository, connect_url, migrate,
};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Fresh in-memory database with the schema applied.
pub async fn setup() -> DatabaseConnection {
    let db = connect_url("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    migrate(&db).await.expect("Failed to run migrations");
    db
}

pub async fn create_user(db: &DatabaseConnection) -> users::Model {
    let suffix = Uuid::new_v4().simple().to_string();
    UserRepository::new(db.clone())
        .create(
            NewUser {
                email: format!("tech-{suffix}@school.org"),
                username: format!("tech-{suffix}"),
                password: "password123".to_string(),
                full_name: "Field Tech".to_string(),
                is_active: true,
                is_superuser: false,
            },
            "$argon2id$test_hash",
        )
        .await
        .expect("Failed to create user")
}

pub async fn create_school(db: &DatabaseConnection) -> schools::Model {
    SchoolRepository::new(db.clone())
        .create(NewSchool {
            name: "Hillside Primary".to_string(),
            contact_name: "Ms. Okafor".to_string(),
            address: "12 Hill Road".to_string(),
        })
        .await
        .expect("Failed to create school")
}

pub async fn create_device(db: &DatabaseConnection) -> devices::Model {
    DeviceRepository::new(db.clone())
        .create(NewDevice {
            manufacturer: "Lenovo".to_string(),
            model: "100e Chromebook".to_string(),
        })
        .await
        .expect("Failed to create device")
}

pub fn new_repair(school_id: Uuid, device_model_id: Uuid, serial: &str) -> NewRepair {
    NewRepair {
        date_raised: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        school_id,
        device_serial: serial.to_string(),
        device_model_id,
        has_protective_case: true,
        external_ticket_number: None,
    }
}

/// A repair with its own user, school and device.
pub async fn create_repair(db: &DatabaseConnection) -> repairs::Model {
    let user = create_user(db).await;
    let school = create_school(db).await;
    let device = create_device(db).await;

    RepairRepository::new(db.clone())
        .create(new_repair(school.id, device.id, "SN-0001"), user.id)
        .await
        .expect("Failed to create repair")
}
