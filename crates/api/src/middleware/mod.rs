//! Request extractors for authentication.

pub mod auth;

pub use auth::{CurrentUser, SuperUser, extract_token};
