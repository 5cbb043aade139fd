//! Database migration runner for RepairDesk.
//!
//! The server applies pending migrations on startup; this tool is for
//! inspecting and rolling them back. It reads `DATABASE_URL`, e.g.
//! `sqlite://repairdesk.db?mode=rwc` or `postgres://user:pw@host/db`.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use repairdesk_db::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI sets up its own tracing.
    cli::run_cli(Migrator).await;
}
