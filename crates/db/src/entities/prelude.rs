//! Entity aliases.

pub use super::collections::Entity as Collections;
pub use super::devices::Entity as Devices;
pub use super::notes::Entity as Notes;
pub use super::repairs::Entity as Repairs;
pub use super::schools::Entity as Schools;
pub use super::users::Entity as Users;
