//! Core domain rules for RepairDesk.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//! Input payloads, partial-update types, validation and the delete policy
//! live here; persistence and HTTP layers build on them.
//!
//! # Modules
//!
//! - `auth` - Password hashing and account checks
//! - `school`, `device`, `collection`, `note`, `user` - Create and patch payloads
//! - `repair` - Repair status lifecycle and workflow shortcuts
//! - `policy` - Per-entity delete switches
//! - `validation` - Payload validation into `AppError`

pub mod auth;
pub mod collection;
pub mod device;
pub mod note;
pub mod policy;
pub mod repair;
pub mod school;
pub mod user;
pub mod validation;

pub use collection::{CollectionPatch, NewCollection};
pub use device::{DevicePatch, NewDevice};
pub use note::{NewNote, NotePatch};
pub use policy::{DeletePolicy, Entity};
pub use repair::{CollectionAssignment, NewRepair, RepairPatch, RepairStatus, RepairStatusChange};
pub use school::{NewSchool, SchoolPatch};
pub use user::{NewUser, PasswordChange, ProfilePatch, RegisterUser, UserPatch};
pub use validation::validate;
