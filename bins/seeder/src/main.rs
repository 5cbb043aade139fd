//! Database seeder for RepairDesk.
//!
//! Creates the first superuser and, unless `--no-demo` is passed, a demo
//! school and device catalog. Safe to run repeatedly: existing rows are left
//! alone.
//!
//! The superuser comes from `REPAIRDESK_ADMIN_EMAIL`,
//! `REPAIRDESK_ADMIN_USERNAME` and `REPAIRDESK_ADMIN_PASSWORD`.
//!
//! Usage: cargo run --bin seeder [-- --no-demo]

use anyhow::{Context, bail};
use repairdesk_core::{NewDevice, NewSchool, NewUser, auth::hash_password, validate};
use repairdesk_db::{DeviceRepository, SchoolRepository, UserRepository, connect, migrate};
use repairdesk_shared::AppConfig;
use sea_orm::DatabaseConnection;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_DEVICES: [(&str, &str); 4] = [
    ("Acer", "Chromebook Spin 511"),
    ("Dell", "Latitude 3190"),
    ("HP", "Chromebook 11 G8 EE"),
    ("Lenovo", "100e Chromebook Gen 3"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repairdesk=info,seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = connect(&config.database).await?;
    migrate(&db).await?;

    seed_superuser(&db).await?;

    if std::env::args().any(|arg| arg == "--no-demo") {
        info!("Skipping demo catalog");
    } else {
        seed_demo_catalog(&db).await?;
    }

    info!("Seeding complete");
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Creates the first superuser unless the email or username is taken.
async fn seed_superuser(db: &DatabaseConnection) -> anyhow::Result<()> {
    let Ok(password) = std::env::var("REPAIRDESK_ADMIN_PASSWORD") else {
        bail!("REPAIRDESK_ADMIN_PASSWORD must be set");
    };

    let admin = NewUser {
        email: env_or("REPAIRDESK_ADMIN_EMAIL", "admin@repairdesk.local"),
        username: env_or("REPAIRDESK_ADMIN_USERNAME", "admin"),
        password,
        full_name: "Administrator".to_string(),
        is_active: true,
        is_superuser: true,
    };
    validate(&admin).context("Invalid superuser settings")?;

    let users = UserRepository::new(db.clone());
    if users.email_exists(&admin.email).await? || users.username_exists(&admin.username).await? {
        info!(email = %admin.email, "Superuser already exists, skipping");
        return Ok(());
    }

    let password_hash = hash_password(&admin.password)?;
    let user = users.create(admin, &password_hash).await?;
    info!(user_id = %user.id, email = %user.email, "Superuser created");
    Ok(())
}

/// Adds a demo school and the common device models when the tables are empty.
async fn seed_demo_catalog(db: &DatabaseConnection) -> anyhow::Result<()> {
    let schools = SchoolRepository::new(db.clone());
    if schools.list().await?.is_empty() {
        let school = schools
            .create(NewSchool {
                name: "Demo Primary School".to_string(),
                contact_name: "Front Office".to_string(),
                address: "1 Example Street".to_string(),
            })
            .await?;
        info!(school_id = %school.id, "Demo school created");
    }

    let devices = DeviceRepository::new(db.clone());
    if devices.list().await?.is_empty() {
        for (manufacturer, model) in DEMO_DEVICES {
            devices
                .create(NewDevice {
                    manufacturer: manufacturer.to_string(),
                    model: model.to_string(),
                })
                .await?;
        }
        info!(count = DEMO_DEVICES.len(), "Demo devices created");
    }

    Ok(())
}
