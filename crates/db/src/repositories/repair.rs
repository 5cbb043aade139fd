//! Repair repository for database operations.

use repairdesk_core::{Entity, NewRepair, RepairPatch, RepairStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{collections, devices, notes, repairs, schools};

const ENTITY: &str = Entity::Repair.label();

/// Filters for listing repairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepairFilter {
    /// Only repairs in this state.
    pub status: Option<RepairStatus>,
    /// Only repairs for this school.
    pub school_id: Option<Uuid>,
    /// Maximum number of rows.
    pub limit: Option<u64>,
}

/// Repair repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct RepairRepository {
    db: DatabaseConnection,
}

impl RepairRepository {
    /// Creates a new repair repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises a repair on behalf of `creator_id`. Status starts at OPEN.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The school or device does not exist
    /// - The database insert fails
    pub async fn create(
        &self,
        input: NewRepair,
        creator_id: Uuid,
    ) -> Result<repairs::Model, RepoError> {
        ensure_school(&self.db, input.school_id).await?;
        ensure_device(&self.db, input.device_model_id).await?;

        let now = chrono::Utc::now().into();
        let repair = repairs::ActiveModel {
            id: Set(Uuid::new_v4()),
            status: Set(RepairStatus::Open.into()),
            creator_id: Set(creator_id),
            created_at: Set(now),
            updated_at: Set(now),
            date_raised: Set(input.date_raised),
            date_closed: Set(None),
            school_id: Set(input.school_id),
            device_serial: Set(input.device_serial),
            device_model_id: Set(input.device_model_id),
            has_protective_case: Set(input.has_protective_case),
            is_sla_breached: Set(false),
            external_ticket_number: Set(input.external_ticket_number),
            inbound_collection_id: Set(None),
            outbound_collection_id: Set(None),
            inbound_date: Set(None),
            outbound_date: Set(None),
        };

        Ok(repair.insert(&self.db).await?)
    }

    /// Lists repairs, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: RepairFilter) -> Result<Vec<repairs::Model>, RepoError> {
        let mut query = repairs::Entity::find();

        if let Some(status) = filter.status {
            let status: crate::entities::sea_orm_active_enums::RepairStatus = status.into();
            query = query.filter(repairs::Column::Status.eq(status));
        }
        if let Some(school_id) = filter.school_id {
            query = query.filter(repairs::Column::SchoolId.eq(school_id));
        }

        query = query
            .order_by_desc(repairs::Column::CreatedAt)
            .order_by_desc(repairs::Column::Id);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        Ok(query.all(&self.db).await?)
    }

    /// Finds a repair by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<repairs::Model>, RepoError> {
        Ok(repairs::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a repair by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the repair is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<repairs::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// Every id the patch points at must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Repair not found
    /// - A referenced school, device or collection does not exist
    /// - The database update fails
    pub async fn update(&self, id: Uuid, patch: RepairPatch) -> Result<repairs::Model, RepoError> {
        let repair = self.get(id).await?;
        if patch.is_empty() {
            return Ok(repair);
        }

        if let Some(school_id) = patch.school_id {
            ensure_school(&self.db, school_id).await?;
        }
        if let Some(device_model_id) = patch.device_model_id {
            ensure_device(&self.db, device_model_id).await?;
        }
        for collection_id in patch.referenced_collections() {
            ensure_collection(&self.db, collection_id).await?;
        }

        let mut active: repairs::ActiveModel = repair.into();

        if let Some(status) = patch.status {
            active.status = Set(status.into());
        }
        if let Some(date_raised) = patch.date_raised {
            active.date_raised = Set(date_raised);
        }
        if let Some(date_closed) = patch.date_closed {
            active.date_closed = Set(date_closed);
        }
        if let Some(school_id) = patch.school_id {
            active.school_id = Set(school_id);
        }
        if let Some(device_serial) = patch.device_serial {
            active.device_serial = Set(device_serial);
        }
        if let Some(device_model_id) = patch.device_model_id {
            active.device_model_id = Set(device_model_id);
        }
        if let Some(has_protective_case) = patch.has_protective_case {
            active.has_protective_case = Set(has_protective_case);
        }
        if let Some(external_ticket_number) = patch.external_ticket_number {
            active.external_ticket_number = Set(external_ticket_number);
        }
        if let Some(is_sla_breached) = patch.is_sla_breached {
            active.is_sla_breached = Set(is_sla_breached);
        }
        if let Some(inbound_collection_id) = patch.inbound_collection_id {
            active.inbound_collection_id = Set(inbound_collection_id);
        }
        if let Some(outbound_collection_id) = patch.outbound_collection_id {
            active.outbound_collection_id = Set(outbound_collection_id);
        }
        if let Some(inbound_date) = patch.inbound_date {
            active.inbound_date = Set(inbound_date);
        }
        if let Some(outbound_date) = patch.outbound_date {
            active.outbound_date = Set(outbound_date);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a repair together with its notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the repair is missing or the transaction fails.
    pub async fn delete(&self, id: Uuid) -> Result<repairs::Model, RepoError> {
        let txn = self.db.begin().await?;

        let repair = repairs::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })?;

        let removed = notes::Entity::delete_many()
            .filter(notes::Column::RepairId.eq(id))
            .exec(&txn)
            .await?;

        repair.clone().delete(&txn).await?;
        txn.commit().await?;

        tracing::debug!(repair_id = %id, notes = removed.rows_affected, "repair deleted");
        Ok(repair)
    }
}

async fn ensure_school<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), RepoError> {
    schools::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(RepoError::MissingReference {
            entity: Entity::School.label(),
            id,
        })
}

async fn ensure_device<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), RepoError> {
    devices::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(RepoError::MissingReference {
            entity: Entity::Device.label(),
            id,
        })
}

async fn ensure_collection<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), RepoError> {
    collections::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or(RepoError::MissingReference {
            entity: Entity::Collection.label(),
            id,
        })
}
