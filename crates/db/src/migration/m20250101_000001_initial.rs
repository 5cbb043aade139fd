//! Initial schema: users, schools, devices, collections, repairs, notes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::FullName)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Users::HashedPassword).string().not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Schools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Schools::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Schools::ContactName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Schools::Address).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Devices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Devices::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Devices::Manufacturer)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Devices::Model).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Collections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Collections::CollectionNumber)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collections::Origin).string_len(255).null())
                    .col(
                        ColumnDef::new(Collections::Destination)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Repairs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Repairs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Repairs::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Repairs::CreatorId).uuid().not_null())
                    .col(
                        ColumnDef::new(Repairs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Repairs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Repairs::DateRaised).date().not_null())
                    .col(ColumnDef::new(Repairs::DateClosed).date().null())
                    .col(ColumnDef::new(Repairs::SchoolId).uuid().not_null())
                    .col(
                        ColumnDef::new(Repairs::DeviceSerial)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Repairs::DeviceModelId).uuid().not_null())
                    .col(
                        ColumnDef::new(Repairs::HasProtectiveCase)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Repairs::IsSlaBreached)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Repairs::ExternalTicketNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(Repairs::InboundCollectionId).uuid().null())
                    .col(ColumnDef::new(Repairs::OutboundCollectionId).uuid().null())
                    .col(ColumnDef::new(Repairs::InboundDate).date().null())
                    .col(ColumnDef::new(Repairs::OutboundDate).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_creator")
                            .from(Repairs::Table, Repairs::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_school")
                            .from(Repairs::Table, Repairs::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_device_model")
                            .from(Repairs::Table, Repairs::DeviceModelId)
                            .to(Devices::Table, Devices::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_inbound_collection")
                            .from(Repairs::Table, Repairs::InboundCollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repairs_outbound_collection")
                            .from(Repairs::Table, Repairs::OutboundCollectionId)
                            .to(Collections::Table, Collections::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repairs_created_at")
                    .table(Repairs::Table)
                    .col(Repairs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Notes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Notes::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Notes::RepairId).uuid().not_null())
                    .col(ColumnDef::new(Notes::Text).text().not_null())
                    .col(
                        ColumnDef::new(Notes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notes_repair")
                            .from(Notes::Table, Notes::RepairId)
                            .to(Repairs::Table, Repairs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notes_creator")
                            .from(Notes::Table, Notes::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notes_repair")
                    .table(Notes::Table)
                    .col(Notes::RepairId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Repairs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Collections::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Devices::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    FullName,
    HashedPassword,
    IsActive,
    IsSuperuser,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Name,
    ContactName,
    Address,
}

#[derive(DeriveIden)]
enum Devices {
    Table,
    Id,
    Manufacturer,
    Model,
}

#[derive(DeriveIden)]
enum Collections {
    Table,
    Id,
    CollectionNumber,
    Origin,
    Destination,
}

#[derive(DeriveIden)]
enum Repairs {
    Table,
    Id,
    Status,
    CreatorId,
    CreatedAt,
    UpdatedAt,
    DateRaised,
    DateClosed,
    SchoolId,
    DeviceSerial,
    DeviceModelId,
    HasProtectiveCase,
    IsSlaBreached,
    ExternalTicketNumber,
    InboundCollectionId,
    OutboundCollectionId,
    InboundDate,
    OutboundDate,
}

#[derive(DeriveIden)]
enum Notes {
    Table,
    Id,
    CreatorId,
    RepairId,
    Text,
    CreatedAt,
    UpdatedAt,
}
