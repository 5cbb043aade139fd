//! `SeaORM` Entity for repairs table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::RepairStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repairs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub status: RepairStatus,
    pub creator_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub date_raised: Date,
    pub date_closed: Option<Date>,
    pub school_id: Uuid,
    pub device_serial: String,
    pub device_model_id: Uuid,
    pub has_protective_case: bool,
    pub is_sla_breached: bool,
    pub external_ticket_number: Option<String>,
    pub inbound_collection_id: Option<Uuid>,
    pub outbound_collection_id: Option<Uuid>,
    pub inbound_date: Option<Date>,
    pub outbound_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schools::Entity",
        from = "Column::SchoolId",
        to = "super::schools::Column::Id"
    )]
    Schools,
    #[sea_orm(
        belongs_to = "super::devices::Entity",
        from = "Column::DeviceModelId",
        to = "super::devices::Column::Id"
    )]
    Devices,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatorId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::collections::Entity",
        from = "Column::InboundCollectionId",
        to = "super::collections::Column::Id"
    )]
    InboundCollection,
    #[sea_orm(
        belongs_to = "super::collections::Entity",
        from = "Column::OutboundCollectionId",
        to = "super::collections::Column::Id"
    )]
    OutboundCollection,
    #[sea_orm(has_many = "super::notes::Entity")]
    Notes,
}

impl Related<super::schools::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schools.def()
    }
}

impl Related<super::devices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Devices.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
