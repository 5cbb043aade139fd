//! Note repository for database operations.

use repairdesk_core::{Entity, NewNote, NotePatch};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::{notes, repairs};

const ENTITY: &str = Entity::Note.label();

/// Note repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    db: DatabaseConnection,
}

impl NoteRepository {
    /// Creates a new note repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a note to a repair on behalf of `creator_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repair does not exist
    /// - The database insert fails
    pub async fn create(&self, input: NewNote, creator_id: Uuid) -> Result<notes::Model, RepoError> {
        if repairs::Entity::find_by_id(input.repair_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(RepoError::MissingReference {
                entity: Entity::Repair.label(),
                id: input.repair_id,
            });
        }

        let now = chrono::Utc::now().into();
        let note = notes::ActiveModel {
            id: Set(Uuid::new_v4()),
            creator_id: Set(creator_id),
            repair_id: Set(input.repair_id),
            text: Set(input.text),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(note.insert(&self.db).await?)
    }

    /// Lists all notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<notes::Model>, RepoError> {
        Ok(notes::Entity::find()
            .order_by_asc(notes::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Lists the note thread of one repair, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_repair(&self, repair_id: Uuid) -> Result<Vec<notes::Model>, RepoError> {
        Ok(notes::Entity::find()
            .filter(notes::Column::RepairId.eq(repair_id))
            .order_by_asc(notes::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Finds a note by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<notes::Model>, RepoError> {
        Ok(notes::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a note by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<notes::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Replaces the note text.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is missing or the update fails.
    pub async fn update(&self, id: Uuid, patch: NotePatch) -> Result<notes::Model, RepoError> {
        let note = self.get(id).await?;
        if patch.is_empty() {
            return Ok(note);
        }

        let mut active: notes::ActiveModel = note.into();
        if let Some(text) = patch.text {
            active.text = Set(text);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns an error if the note is missing or the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<notes::Model, RepoError> {
        let note = self.get(id).await?;
        note.clone().delete(&self.db).await?;
        Ok(note)
    }
}
