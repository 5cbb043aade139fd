//! HTTP layer with Axum routes, auth extractors and HTML fragments.
//!
//! This crate provides:
//! - JSON CRUD routes per entity
//! - Cookie and bearer authentication extractors
//! - Server-rendered pages and HTMX fragments

pub mod error;
pub mod middleware;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use repairdesk_core::DeletePolicy;
use repairdesk_shared::{AppConfig, JwtError, JwtService, config::AppInfo};
use sea_orm::DatabaseConnection;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Reasons the application state cannot be built.
#[derive(Debug, Error)]
pub enum StateError {
    /// The JWT settings are unusable.
    #[error("invalid JWT configuration: {0}")]
    Jwt(#[from] JwtError),

    /// The bundled page templates did not compile.
    #[error(transparent)]
    Views(#[from] views::ViewError),
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Name and version shown in pages and health checks.
    pub app: Arc<AppInfo>,
    /// Which entities may be deleted.
    pub delete_policy: DeletePolicy,
    /// Whether the auth cookie is marked `Secure`.
    pub secure_cookies: bool,
}

impl AppState {
    /// Builds the state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JWT algorithm is not supported or a page
    /// template fails to compile.
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Result<Self, StateError> {
        views::templates()?;

        Ok(Self {
            db: Arc::new(db),
            jwt_service: Arc::new(JwtService::new(&config.jwt)?),
            app: Arc::new(config.app.clone()),
            delete_policy: DeletePolicy::from(&config.policy),
            secure_cookies: config.cookies.secure,
        })
    }

    /// Clones the pooled connection handle for a repository.
    #[must_use]
    pub fn conn(&self) -> DatabaseConnection {
        (*self.db).clone()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
