//! `SeaORM` entity definitions.

pub mod prelude;

pub mod collections;
pub mod devices;
pub mod notes;
pub mod repairs;
pub mod schools;
pub mod sea_orm_active_enums;
pub mod users;
