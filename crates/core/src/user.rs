//! User account inputs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Self-service registration payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUser {
    /// Email address (unique).
    #[validate(email, length(max = 255))]
    pub email: String,
    /// Login name (unique).
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 40))]
    pub password: String,
    /// Display name.
    #[validate(length(max = 255))]
    #[serde(default)]
    pub full_name: String,
}

impl RegisterUser {
    /// Converts a registration into an account with the self-service defaults:
    /// active, not a superuser.
    #[must_use]
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            email: self.email,
            username: self.username,
            password: self.password,
            full_name: self.full_name,
            is_active: true,
            is_superuser: false,
        }
    }
}

/// Account creation with explicit flags (seeding, administration).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Email address (unique).
    #[validate(email, length(max = 255))]
    pub email: String,
    /// Login name (unique).
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Display name.
    #[validate(length(max = 255))]
    #[serde(default)]
    pub full_name: String,
    /// Whether the account may sign in.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the account has administrative privileges.
    #[serde(default)]
    pub is_superuser: bool,
}

const fn default_true() -> bool {
    true
}

/// Changes a user may make to their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfilePatch {
    /// Display name.
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
    /// Email address.
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

impl ProfilePatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

impl From<ProfilePatch> for UserPatch {
    fn from(patch: ProfilePatch) -> Self {
        Self {
            full_name: patch.full_name,
            email: patch.email,
            ..Self::default()
        }
    }
}

/// Password change by the account owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordChange {
    /// Current password.
    #[validate(length(min = 8, max = 40))]
    pub current_password: String,
    /// Replacement password.
    #[validate(length(min = 8, max = 40))]
    pub new_password: String,
}

/// Administrative partial update of any account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserPatch {
    /// Email address.
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    /// Login name.
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,
    /// Display name.
    #[validate(length(max = 255))]
    pub full_name: Option<String>,
    /// Replacement password (hashed before storage).
    #[validate(length(min = 8, max = 40))]
    pub password: Option<String>,
    /// Whether the account may sign in.
    pub is_active: Option<bool>,
    /// Whether the account has administrative privileges.
    pub is_superuser: Option<bool>,
}

impl UserPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.full_name.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
            && self.is_superuser.is_none()
    }
}
