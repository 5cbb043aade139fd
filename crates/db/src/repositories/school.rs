//! School repository for database operations.

use repairdesk_core::{Entity, NewSchool, SchoolPatch};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{repairs, schools};

const ENTITY: &str = Entity::School.label();

/// School repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SchoolRepository {
    db: DatabaseConnection,
}

impl SchoolRepository {
    /// Creates a new school repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new school.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: NewSchool) -> Result<schools::Model, RepoError> {
        let school = schools::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            contact_name: Set(input.contact_name),
            address: Set(input.address),
        };

        Ok(school.insert(&self.db).await?)
    }

    /// Lists all schools.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<schools::Model>, RepoError> {
        Ok(schools::Entity::find().all(&self.db).await?)
    }

    /// Finds a school by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<schools::Model>, RepoError> {
        Ok(schools::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a school by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<schools::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error if the school is missing or the update fails.
    pub async fn update(&self, id: Uuid, patch: SchoolPatch) -> Result<schools::Model, RepoError> {
        let school = self.get(id).await?;
        if patch.is_empty() {
            return Ok(school);
        }

        let mut active: schools::ActiveModel = school.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(contact_name) = patch.contact_name {
            active.contact_name = Set(contact_name);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }

        Ok(active.update(&self.db).await?)
    }

    /// Counts repairs raised for a school.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_repairs(&self, id: Uuid) -> Result<u64, RepoError> {
        Ok(repairs::Entity::find()
            .filter(repairs::Column::SchoolId.eq(id))
            .count(&self.db)
            .await?)
    }

    /// Deletes a school that no repair refers to.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - School not found
    /// - School is referenced by repairs
    pub async fn delete(&self, id: Uuid) -> Result<schools::Model, RepoError> {
        let school = self.get(id).await?;

        let count = self.count_repairs(id).await?;
        if count > 0 {
            return Err(RepoError::InUse {
                entity: ENTITY,
                count,
            });
        }

        school.clone().delete(&self.db).await?;
        Ok(school)
    }
}
