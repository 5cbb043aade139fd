//! Collection repository for database operations.

use repairdesk_core::{CollectionPatch, Entity, NewCollection};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{collections, repairs};

const ENTITY: &str = Entity::Collection.label();

/// Collection repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    db: DatabaseConnection,
}

impl CollectionRepository {
    /// Creates a new collection repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: NewCollection) -> Result<collections::Model, RepoError> {
        let collection = collections::ActiveModel {
            id: Set(Uuid::new_v4()),
            collection_number: Set(input.collection_number),
            origin: Set(input.origin),
            destination: Set(input.destination),
        };

        Ok(collection.insert(&self.db).await?)
    }

    /// Lists all collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<collections::Model>, RepoError> {
        Ok(collections::Entity::find().all(&self.db).await?)
    }

    /// Finds a collection by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<collections::Model>, RepoError> {
        Ok(collections::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a collection by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<collections::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Applies the supplied fields of `patch`; `Some(None)` clears a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is missing or the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        patch: CollectionPatch,
    ) -> Result<collections::Model, RepoError> {
        let collection = self.get(id).await?;
        if patch.is_empty() {
            return Ok(collection);
        }

        let mut active: collections::ActiveModel = collection.into();

        if let Some(collection_number) = patch.collection_number {
            active.collection_number = Set(collection_number);
        }
        if let Some(origin) = patch.origin {
            active.origin = Set(origin);
        }
        if let Some(destination) = patch.destination {
            active.destination = Set(destination);
        }

        Ok(active.update(&self.db).await?)
    }

    /// Counts repairs using this collection on either leg.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_repairs(&self, id: Uuid) -> Result<u64, RepoError> {
        Ok(repairs::Entity::find()
            .filter(
                Condition::any()
                    .add(repairs::Column::InboundCollectionId.eq(id))
                    .add(repairs::Column::OutboundCollectionId.eq(id)),
            )
            .count(&self.db)
            .await?)
    }

    /// Deletes a collection that no repair refers to.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Collection not found
    /// - Collection is the inbound or outbound leg of a repair
    pub async fn delete(&self, id: Uuid) -> Result<collections::Model, RepoError> {
        let collection = self.get(id).await?;

        let count = self.count_repairs(id).await?;
        if count > 0 {
            return Err(RepoError::InUse {
                entity: ENTITY,
                count,
            });
        }

        collection.clone().delete(&self.db).await?;
        Ok(collection)
    }
}
