//! Error type shared by the repositories.

use repairdesk_shared::AppError;
use sea_orm::DbErr;
use uuid::Uuid;

/// Errors raised by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The addressed row does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Entity label, e.g. "School".
        entity: &'static str,
    },

    /// The row is still referenced by repairs.
    #[error("{entity} is still referenced by {count} repair(s)")]
    InUse {
        /// Entity label.
        entity: &'static str,
        /// Number of referencing repairs.
        count: u64,
    },

    /// A payload points at a row that does not exist.
    #[error("Referenced {entity} {id} does not exist")]
    MissingReference {
        /// Entity label.
        entity: &'static str,
        /// The dangling id.
        id: Uuid,
    },

    /// A unique value is already taken.
    #[error("{0}")]
    Duplicate(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => Self::NotFound(err.to_string()),
            RepoError::InUse { .. } => Self::Conflict(err.to_string()),
            RepoError::MissingReference { .. } => Self::Validation(err.to_string()),
            RepoError::Duplicate(message) => Self::BadRequest(message),
            RepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_errors() {
        let not_found: AppError = RepoError::NotFound { entity: "School" }.into();
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.message(), "School not found");

        let in_use: AppError = RepoError::InUse {
            entity: "Device",
            count: 2,
        }
        .into();
        assert_eq!(in_use.status_code(), 409);
        assert_eq!(in_use.message(), "Device is still referenced by 2 repair(s)");

        let missing: AppError = RepoError::MissingReference {
            entity: "School",
            id: Uuid::nil(),
        }
        .into();
        assert_eq!(missing.status_code(), 422);

        let duplicate: AppError = RepoError::Duplicate("taken".to_string()).into();
        assert_eq!(duplicate.status_code(), 400);

        let db: AppError = RepoError::Database(DbErr::Custom("boom".to_string())).into();
        assert_eq!(db.status_code(), 500);
    }
}
