//! Authentication rules.
//!
//! Password hashing lives in [`password`]; account-level checks that the
//! request layer applies after loading a user live here.

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use repairdesk_shared::{AppError, AppResult};

/// Rejects users that are not allowed to sign in.
pub fn ensure_active(is_active: bool) -> AppResult<()> {
    if is_active {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Inactive user".to_string()))
    }
}

/// Rejects users without administrative privileges.
pub fn ensure_superuser(is_superuser: bool) -> AppResult<()> {
    if is_superuser {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "The user doesn't have enough privileges".to_string(),
        ))
    }
}
