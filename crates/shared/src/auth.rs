//! Authentication types for JWT and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }
}

/// Access token returned to bearer clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Signed access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

impl Token {
    /// Wraps a signed token as a bearer token.
    #[must_use]
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

/// Login form payload (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Username or email address.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// Query string of the login endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginQuery {
    /// Path to return to after a successful login.
    pub next: Option<String>,
}

impl LoginQuery {
    /// Returns the redirect target, falling back to `/` for anything that is
    /// not a same-site absolute path.
    #[must_use]
    pub fn redirect_target(&self) -> &str {
        match self.next.as_deref() {
            Some(next) if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') => next,
            _ => "/",
        }
    }
}
