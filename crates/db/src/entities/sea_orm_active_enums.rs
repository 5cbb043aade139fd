//! Enumerations stored as strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Repair lifecycle state column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RepairStatus {
    /// Raised.
    #[sea_orm(string_value = "OPEN")]
    Open,
    /// In progress.
    #[sea_orm(string_value = "PENDING")]
    Pending,
    /// Done.
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

impl From<repairdesk_core::RepairStatus> for RepairStatus {
    fn from(status: repairdesk_core::RepairStatus) -> Self {
        match status {
            repairdesk_core::RepairStatus::Open => Self::Open,
            repairdesk_core::RepairStatus::Pending => Self::Pending,
            repairdesk_core::RepairStatus::Closed => Self::Closed,
        }
    }
}

impl From<RepairStatus> for repairdesk_core::RepairStatus {
    fn from(status: RepairStatus) -> Self {
        match status {
            RepairStatus::Open => Self::Open,
            RepairStatus::Pending => Self::Pending,
            RepairStatus::Closed => Self::Closed,
        }
    }
}
