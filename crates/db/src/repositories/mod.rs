//! Repository implementations for data access.

pub mod collection;
pub mod device;
pub mod error;
pub mod note;
pub mod repair;
pub mod school;
pub mod user;

pub use collection::CollectionRepository;
pub use device::DeviceRepository;
pub use error::RepoError;
pub use note::NoteRepository;
pub use repair::{RepairFilter, RepairRepository};
pub use school::SchoolRepository;
pub use user::UserRepository;
