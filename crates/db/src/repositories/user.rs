//! User repository for database operations.

use repairdesk_core::{NewUser, UserPatch};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::RepoError;
use crate::entities::users;

const ENTITY: &str = "User";

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the user a login form refers to; `login` may be either the email
    /// or the username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_login(&self, login: &str) -> Result<Option<users::Model>, RepoError> {
        Ok(users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(login))
                    .add(users::Column::Username.eq(login)),
            )
            .one(&self.db)
            .await?)
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, RepoError> {
        Ok(users::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Gets a user by ID, failing with `NotFound` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or the query fails.
    pub async fn get(&self, id: Uuid) -> Result<users::Model, RepoError> {
        self.find_by_id(id)
            .await?
            .ok_or(RepoError::NotFound { entity: ENTITY })
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_exists(&self, username: &str) -> Result<bool, RepoError> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new user. `password_hash` is the PHC string of the password.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email or username is already registered
    /// - The database insert fails
    pub async fn create(
        &self,
        input: NewUser,
        password_hash: &str,
    ) -> Result<users::Model, RepoError> {
        if self.email_exists(&input.email).await? {
            return Err(RepoError::Duplicate(
                "The user with this email already exists in the system".to_string(),
            ));
        }
        if self.username_exists(&input.username).await? {
            return Err(RepoError::Duplicate(
                "The user with this username already exists in the system".to_string(),
            ));
        }

        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(input.username),
            email: Set(input.email),
            full_name: Set(input.full_name),
            hashed_password: Set(password_hash.to_string()),
            is_active: Set(input.is_active),
            is_superuser: Set(input.is_superuser),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(user.insert(&self.db).await?)
    }

    /// Lists all users in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<users::Model>, RepoError> {
        Ok(users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// `patch.password` is ignored; callers hash it and pass `password_hash`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - User not found
    /// - The new email or username belongs to another user
    /// - The database update fails
    pub async fn update(
        &self,
        id: Uuid,
        patch: UserPatch,
        password_hash: Option<String>,
    ) -> Result<users::Model, RepoError> {
        let user = self.get(id).await?;
        if patch.is_empty() && password_hash.is_none() {
            return Ok(user);
        }

        if let Some(email) = patch.email.as_deref()
            && email != user.email
            && self.email_exists(email).await?
        {
            return Err(RepoError::Duplicate(
                "User with this email already exists".to_string(),
            ));
        }
        if let Some(username) = patch.username.as_deref()
            && username != user.username
            && self.username_exists(username).await?
        {
            return Err(RepoError::Duplicate(
                "User with this username already exists".to_string(),
            ));
        }

        let mut active: users::ActiveModel = user.into();

        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(username) = patch.username {
            active.username = Set(username);
        }
        if let Some(full_name) = patch.full_name {
            active.full_name = Set(full_name);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(is_superuser) = patch.is_superuser {
            active.is_superuser = Set(is_superuser);
        }
        if let Some(password_hash) = password_hash {
            active.hashed_password = Set(password_hash);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Replaces the stored password hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or the update fails.
    pub async fn set_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<users::Model, RepoError> {
        self.update(id, UserPatch::default(), Some(password_hash.to_string()))
            .await
    }
}
