//! Authentication routes: login page, cookie login, bearer token, logout and
//! registration.

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use super::users::UserResponse;
use crate::{ApiError, ApiResult, AppState, views::pages};
use repairdesk_core::{
    RegisterUser,
    auth::{ensure_active, hash_password, verify_password},
    validate,
};
use repairdesk_db::{UserRepository, entities::users};
use repairdesk_shared::{ACCESS_TOKEN_COOKIE, AppError, LoginForm, LoginQuery, Token};

const BAD_LOGIN: &str = "Incorrect username or password";

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_page).post(login))
        .route("/auth/token", post(token))
        .route("/auth/logout", post(logout))
        .route("/auth/register", post(register))
}

/// Checks a login form against the stored credentials.
///
/// Unknown user and wrong password fail with the same message.
async fn authenticate(state: &AppState, form: &LoginForm) -> ApiResult<users::Model> {
    let user = UserRepository::new(state.conn())
        .find_by_login(form.username.trim())
        .await?;

    let Some(user) = user else {
        info!(login = %form.username, "Login attempt for non-existent user");
        return Err(AppError::Unauthorized(BAD_LOGIN.to_string()).into());
    };

    if !verify_password(&form.password, &user.hashed_password)? {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(AppError::Unauthorized(BAD_LOGIN.to_string()).into());
    }

    if let Err(err) = ensure_active(user.is_active) {
        info!(user_id = %user.id, "Login attempt for inactive user");
        return Err(err.into());
    }

    Ok(user)
}

/// GET /auth/login - Render the sign-in page.
async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> ApiResult<Html<String>> {
    Ok(Html(pages::login_page(
        &state.app,
        query.redirect_target(),
        None,
    )?))
}

/// POST /auth/login - Sign in from the browser form.
///
/// Sets the auth cookie and redirects to `next`. Failed attempts re-render
/// the form with status 401 and no cookie.
async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    let target = query.redirect_target().to_string();

    let user = match authenticate(&state, &form).await {
        Ok(user) => user,
        Err(ApiError(AppError::Unauthorized(message))) => {
            let page = pages::login_page(&state.app, &target, Some(&message))?;
            return Ok((StatusCode::UNAUTHORIZED, Html(page)).into_response());
        }
        Err(e) => return Err(e),
    };

    let access_token = state.jwt_service.generate_access_token(user.id)?;
    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, access_token))
        .path("/")
        .http_only(true)
        .secure(state.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(
            state.jwt_service.access_token_expires_in(),
        ));

    info!(user_id = %user.id, "User logged in successfully");
    Ok((jar.add(cookie), Redirect::to(&target)).into_response())
}

/// POST /auth/token - Exchange credentials for a bearer token.
async fn token(State(state): State<AppState>, Form(form): Form<LoginForm>) -> ApiResult<Json<Token>> {
    let user = authenticate(&state, &form).await?;
    let access_token = state.jwt_service.generate_access_token(user.id)?;

    info!(user_id = %user.id, "Issued access token");
    Ok(Json(Token::bearer(
        access_token,
        state.jwt_service.access_token_expires_in(),
    )))
}

/// POST /auth/logout - Clear the auth cookie.
async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, "")).path("/");
    (jar.remove(cookie), Redirect::to("/auth/login"))
}

/// POST /auth/register - Create an account.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    validate(&payload)?;

    let password_hash = hash_password(&payload.password)?;
    let user = UserRepository::new(state.conn())
        .create(payload.into_new_user(), &password_hash)
        .await?;

    info!(user_id = %user.id, email = %user.email, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}
