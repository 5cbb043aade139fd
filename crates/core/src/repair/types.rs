use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::RepairStatus;

/// Payload for raising a repair. Status starts at OPEN and the creator comes
/// from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewRepair {
    /// Day the fault was reported.
    pub date_raised: NaiveDate,
    /// School that owns the device.
    pub school_id: Uuid,
    /// Device serial number.
    #[validate(length(min = 1, max = 255))]
    pub device_serial: String,
    /// Device catalog entry.
    pub device_model_id: Uuid,
    /// Whether the device arrived in a protective case.
    #[serde(default = "default_true")]
    pub has_protective_case: bool,
    /// Ticket number in the school's or vendor's system.
    #[validate(length(max = 100))]
    #[serde(default)]
    pub external_ticket_number: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// Partial update of a repair.
///
/// Nullable columns use a double option: `None` leaves the column alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RepairPatch {
    /// New lifecycle state.
    pub status: Option<RepairStatus>,
    /// Day the fault was reported.
    pub date_raised: Option<NaiveDate>,
    /// Day the repair was closed.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub date_closed: Option<Option<NaiveDate>>,
    /// School that owns the device.
    pub school_id: Option<Uuid>,
    /// Device serial number.
    #[validate(length(min = 1, max = 255))]
    pub device_serial: Option<String>,
    /// Device catalog entry.
    pub device_model_id: Option<Uuid>,
    /// Whether the device arrived in a protective case.
    pub has_protective_case: Option<bool>,
    /// External ticket number.
    #[validate(length(max = 100))]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub external_ticket_number: Option<Option<String>>,
    /// Whether the service-level target was missed.
    pub is_sla_breached: Option<bool>,
    /// Collection bringing the device in.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub inbound_collection_id: Option<Option<Uuid>>,
    /// Collection returning the device.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub outbound_collection_id: Option<Option<Uuid>>,
    /// Day the device came in.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub inbound_date: Option<Option<NaiveDate>>,
    /// Day the device went back.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub outbound_date: Option<Option<NaiveDate>>,
}

impl RepairPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.date_raised.is_none()
            && self.date_closed.is_none()
            && self.school_id.is_none()
            && self.device_serial.is_none()
            && self.device_model_id.is_none()
            && self.has_protective_case.is_none()
            && self.external_ticket_number.is_none()
            && self.is_sla_breached.is_none()
            && self.inbound_collection_id.is_none()
            && self.outbound_collection_id.is_none()
            && self.inbound_date.is_none()
            && self.outbound_date.is_none()
    }

    /// Collection ids this patch points the repair at.
    pub fn referenced_collections(&self) -> impl Iterator<Item = Uuid> + '_ {
        [self.inbound_collection_id, self.outbound_collection_id]
            .into_iter()
            .flatten()
            .flatten()
    }
}

/// Workflow shortcut: move a repair to another state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RepairStatusChange {
    /// Target state.
    pub status: RepairStatus,
    /// Closing day, applied only when supplied.
    #[serde(default)]
    pub date_closed: Option<NaiveDate>,
}

impl From<RepairStatusChange> for RepairPatch {
    fn from(change: RepairStatusChange) -> Self {
        Self {
            status: Some(change.status),
            date_closed: change.date_closed.map(Some),
            ..Self::default()
        }
    }
}

/// Workflow shortcut: attach inbound/outbound collections to a repair.
/// Only supplied fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CollectionAssignment {
    /// Collection bringing the device in.
    #[serde(default)]
    pub inbound_collection_id: Option<Uuid>,
    /// Collection returning the device.
    #[serde(default)]
    pub outbound_collection_id: Option<Uuid>,
    /// Day the device came in.
    #[serde(default)]
    pub inbound_date: Option<NaiveDate>,
    /// Day the device went back.
    #[serde(default)]
    pub outbound_date: Option<NaiveDate>,
}

impl From<CollectionAssignment> for RepairPatch {
    fn from(assignment: CollectionAssignment) -> Self {
        Self {
            inbound_collection_id: assignment.inbound_collection_id.map(Some),
            outbound_collection_id: assignment.outbound_collection_id.map(Some),
            inbound_date: assignment.inbound_date.map(Some),
            outbound_date: assignment.outbound_date.map(Some),
            ..Self::default()
        }
    }
}
