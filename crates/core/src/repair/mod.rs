//! Repair tickets.
//!
//! A repair moves OPEN -> PENDING -> CLOSED. This module holds the status
//! type and the create/patch payloads, including the two workflow shortcuts
//! (status change, collection assignment) that are expressed as patches.

mod status;
mod types;

pub use status::{RepairStatus, UnknownStatus};
pub use types::{CollectionAssignment, NewRepair, RepairPatch, RepairStatusChange};

#[cfg(test)]
mod tests;
