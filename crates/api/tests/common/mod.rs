//! Shared setup for router tests: an in-memory database, an app state and
//! request helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use repairdesk_api::{AppState, create_router};
use repairdesk_core::{DeletePolicy, NewUser, auth::hash_password};
use repairdesk_db::{UserRepository, connect_url, entities::users, migrate};
use repairdesk_shared::{JwtConfig, JwtService, config::AppInfo};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const PASSWORD: &str = "correct-horse";

pub async fn state_with_policy(delete_policy: DeletePolicy) -> AppState {
    let db = connect_url("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    migrate(&db).await.expect("Failed to run migrations");

    AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(JwtService::new(&JwtConfig::default()).expect("valid jwt config")),
        app: Arc::new(AppInfo {
            name: "RepairDesk".to_string(),
            version: "9.9.9".to_string(),
        }),
        delete_policy,
        secure_cookies: false,
    }
}

pub async fn state() -> AppState {
    state_with_policy(DeletePolicy::default()).await
}

pub fn app(state: &AppState) -> Router {
    create_router(state.clone())
}

pub async fn create_user(state: &AppState, is_superuser: bool) -> users::Model {
    let suffix = Uuid::new_v4().simple().to_string();
    UserRepository::new(state.conn())
        .create(
            NewUser {
                email: format!("tech-{suffix}@school.org"),
                username: format!("tech-{suffix}"),
                password: PASSWORD.to_string(),
                full_name: "Field Tech".to_string(),
                is_active: true,
                is_superuser,
            },
            &hash_password(PASSWORD).expect("hash"),
        )
        .await
        .expect("Failed to create user")
}

pub fn token_for(state: &AppState, user: &users::Model) -> String {
    state
        .jwt_service
        .generate_access_token(user.id)
        .expect("should generate token")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.expect("request failed")
}

pub fn json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("valid request")
}

pub fn delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("valid request")
}

pub fn form_request(uri: &str, body: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}
