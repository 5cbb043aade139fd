//! Common types used across the application.

pub mod list;

pub use list::{ListQuery, ListResponse};
