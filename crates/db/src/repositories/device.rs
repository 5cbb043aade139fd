//! Device catalog repository for database operations.

use repairdesk_core::{DevicePatch, Entity, NewDevice};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{devices, repairs};

const ENTITY: &str = Entity::Device.label();

/// Device repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct DeviceRepository {
    db: DatabaseConnection,
}

impl DeviceRepository {
    /// Creates a new device repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a device model to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: NewDevice) -> Result<devices::Model, RepoError> {
        let device = devices::ActiveModel {
            id: Set(Uuid::new_v4()),
            manufacturer: Set(input.manufacturer),
            model: Set(input.model),
        };

        Ok(device.insert(&self.db).await?)
    }

    /// Lists the catalog, grouped by manufacturer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<devices::Model>, RepoError> {
        Ok(devices::Entity::find()
            .order_by_asc(devices::Column::Manufacturer)
            .order_by_asc(devices::Column::Model)
            .all(&self.db)
            .await?)
    }

    /// Finds a device model by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<devices::Model>, RepoError> {
        Ok(devices::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a device model by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<devices::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is missing or the update fails.
    pub async fn update(&self, id: Uuid, patch: DevicePatch) -> Result<devices::Model, RepoError> {
        let device = self.get(id).await?;
        if patch.is_empty() {
            return Ok(device);
        }

        let mut active: devices::ActiveModel = device.into();

        if let Some(manufacturer) = patch.manufacturer {
            active.manufacturer = Set(manufacturer);
        }
        if let Some(model) = patch.model {
            active.model = Set(model);
        }

        Ok(active.update(&self.db).await?)
    }

    /// Counts repairs of this device model.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_repairs(&self, id: Uuid) -> Result<u64, RepoError> {
        Ok(repairs::Entity::find()
            .filter(repairs::Column::DeviceModelId.eq(id))
            .count(&self.db)
            .await?)
    }

    /// Deletes a device model that no repair refers to.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Device not found
    /// - Device is referenced by repairs
    pub async fn delete(&self, id: Uuid) -> Result<devices::Model, RepoError> {
        let device = self.get(id).await?;

        let count = self.count_repairs(id).await?;
        if count > 0 {
            return Err(RepoError::InUse {
                entity: ENTITY,
                count,
            });
        }

        device.clone().delete(&self.db).await?;
        Ok(device)
    }
}
