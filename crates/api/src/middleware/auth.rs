//! Authentication extractors for protected routes.
//!
//! A request is authenticated when it carries a token (the `access_token`
//! cookie first, then an `Authorization: Bearer` header) whose signature,
//! algorithm and expiry check out, and whose subject is an active user.
//! Every failure on that path yields the same 401 response.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use crate::{AppState, error::ApiError};
use repairdesk_core::auth::ensure_superuser;
use repairdesk_db::{UserRepository, entities::users};
use repairdesk_shared::ACCESS_TOKEN_COOKIE;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the request's token: the auth cookie wins over the header.
#[must_use]
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE)
        && !cookie.value().is_empty()
    {
        return Some(cookie.value().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
}

/// The authenticated, active user.
///
/// ```ignore
/// async fn handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
///     user.email
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub users::Model);

impl CurrentUser {
    /// Returns the user ID.
    #[must_use]
    pub const fn id(&self) -> uuid::Uuid {
        self.0.id
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers) else {
            debug!(path = %parts.uri.path(), "request without credentials");
            return Err(ApiError::credentials());
        };

        let claims = state.jwt_service.validate_token(&token).map_err(|e| {
            warn!(error = %e, path = %parts.uri.path(), "rejected token");
            ApiError::credentials()
        })?;

        let user = UserRepository::new(state.conn())
            .find_by_id(claims.user_id())
            .await?;

        match user {
            Some(user) if user.is_active => Ok(Self(user)),
            Some(user) => {
                warn!(user_id = %user.id, "token for inactive user");
                Err(ApiError::credentials())
            }
            None => {
                warn!(user_id = %claims.user_id(), "token for unknown user");
                Err(ApiError::credentials())
            }
        }
    }
}

/// An authenticated user with administrative privileges.
#[derive(Debug, Clone)]
pub struct SuperUser(pub users::Model);

impl FromRequestParts<AppState> for SuperUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        ensure_superuser(user.is_superuser)?;
        Ok(Self(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header::COOKIE};

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_cookie_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(extract_token(&headers).as_deref(), Some("from-header"));

        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; access_token=from-cookie"));
        assert_eq!(extract_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        let mut headers = HeaderMap::new();
        assert!(extract_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(extract_token(&headers).is_none());
    }
}
