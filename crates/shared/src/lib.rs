//! Shared types, errors, and configuration for RepairDesk.
//!
//! This crate provides common types used across all other crates:
//! - Configuration management
//! - Application-wide error types
//! - JWT issuing and validation
//! - Login/token wire types and the list envelope

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;


pub use auth::{ACCESS_TOKEN_COOKIE, Claims, LoginForm, LoginQuery, Token};
pub use config::{AppConfig, DatabaseConfig, DatabaseScheme, JwtConfig, PolicyConfig};
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
pub use types::{ListQuery, ListResponse};
