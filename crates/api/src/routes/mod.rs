//! Route definitions.
//!
//! Protected handlers take a [`CurrentUser`](crate::middleware::CurrentUser)
//! or [`SuperUser`](crate::middleware::SuperUser) argument instead of sitting
//! behind a middleware layer, so public and protected routes share one router.

use axum::Router;

use crate::AppState;

pub mod auth;
pub mod collections;
pub mod devices;
pub mod health;
pub mod notes;
pub mod repairs;
pub mod schools;
pub mod ui;
pub mod users;

/// Creates the router with every route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(users::routes())
        .merge(schools::routes())
        .merge(devices::routes())
        .merge(collections::routes())
        .merge(repairs::routes())
        .merge(notes::routes())
        .merge(ui::routes())
}
