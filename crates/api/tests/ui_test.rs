//! Router tests for the dashboard page and HTMX fragments.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use repairdesk_core::DeletePolicy;

use common::{body_text, form_request, get, send};

const HX_TRIGGER: &str = "hx-trigger";

#[tokio::test]
async fn test_index_redirects_anonymous_users() {
    let state = common::state().await;
    let app = common::app(&state);

    let response = send(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/auth/login?next=/");
}

#[tokio::test]
async fn test_index_renders_for_signed_in_user() {
    let state = common::state().await;
    let app = common::app(&state);
    let token = common::token_for(&state, &common::create_user(&state, false).await);

    let response = send(&app, get("/", &token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Field Tech"));
    assert!(html.contains(r#"hx-get="/ui/repairs""#));
}

#[tokio::test]
async fn test_login_page_renders() {
    let state = common::state().await;
    let app = common::app(&state);

    let response = send(
        &app,
        Request::builder()
            .uri("/auth/login?next=/repairs")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/auth/login?next=%2Frepairs"));
}

#[tokio::test]
async fn test_fragment_create_triggers_refresh_only_on_success() {
    let state = common::state().await;
    let app = common::app(&state);
    let token = common::token_for(&state, &common::create_user(&state, false).await);

    let response = send(
        &app,
        form_request(
            "/ui/schools",
            "name=Hillside+%3CPrimary%3E&contact_name=Ms.+Okafor&address=12+Hill+Road",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[HX_TRIGGER], "refresh-schools");
    assert!(body_text(response).await.contains("School created"));

    let response = send(
        &app,
        form_request("/ui/schools", "name=&contact_name=x&address=y", Some(&token)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(HX_TRIGGER).is_none());
    assert!(body_text(response).await.contains("notice-error"));

    let response = send(&app, get("/ui/schools", &token)).await;
    let html = body_text(response).await;
    assert!(html.contains("Hillside &lt;Primary&gt;"));
    assert!(!html.contains("<Primary>"));
}

#[tokio::test]
async fn test_fragment_repair_form_with_bad_ids() {
    let state = common::state().await;
    let app = common::app(&state);
    let token = common::token_for(&state, &common::create_user(&state, false).await);

    let response = send(
        &app,
        form_request(
            "/ui/repairs",
            &format!(
                "date_raised=2025-03-14&school_id={}&device_model_id=nope&device_serial=SN-1",
                uuid::Uuid::new_v4()
            ),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(HX_TRIGGER).is_none());
    assert!(body_text(response).await.contains("device_model_id"));
}

#[tokio::test]
async fn test_fragment_delete_respects_policy_and_conflicts() {
    let state = common::state().await;
    let app = common::app(&state);
    let token = common::token_for(&state, &common::create_user(&state, false).await);

    let response = send(
        &app,
        form_request("/ui/devices", "manufacturer=Acer&model=Spin+511", Some(&token)),
    )
    .await;
    assert_eq!(response.headers()[HX_TRIGGER], "refresh-devices");

    let devices = repairdesk_db::DeviceRepository::new(state.conn())
        .list()
        .await
        .unwrap();
    let uri = format!("/ui/devices/{}", devices[0].id);

    let response = send(&app, common::delete(&uri, &token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(HX_TRIGGER).is_none());
    assert!(body_text(response).await.contains("Deleting devices is disabled"));

    let permissive = common::state_with_policy(DeletePolicy::permissive()).await;
    let app = common::app(&permissive);
    let token = common::token_for(&permissive, &common::create_user(&permissive, false).await);

    let response = send(
        &app,
        form_request("/ui/devices", "manufacturer=Acer&model=Spin+511", Some(&token)),
    )
    .await;
    assert_eq!(response.headers()[HX_TRIGGER], "refresh-devices");

    let devices = repairdesk_db::DeviceRepository::new(permissive.conn())
        .list()
        .await
        .unwrap();
    let uri = format!("/ui/devices/{}", devices[0].id);

    let response = send(&app, common::delete(&uri, &token)).await;
    assert_eq!(response.headers()[HX_TRIGGER], "refresh-devices");
    assert!(body_text(response).await.contains("Device deleted"));
}

#[tokio::test]
async fn test_unknown_section_is_404() {
    let state = common::state().await;
    let app = common::app(&state);
    let token = common::token_for(&state, &common::create_user(&state, false).await);

    let response = send(&app, get("/ui/widgets", &token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_state_from_config_serves_login_page() {
    use repairdesk_api::{AppState, create_router};
    use repairdesk_shared::config::{
        AppConfig, AppInfo, CookieConfig, DatabaseConfig, JwtConfig, PolicyConfig, ServerConfig,
    };

    let db = repairdesk_db::connect_url("sqlite::memory:").await.unwrap();
    let config = AppConfig {
        app: AppInfo::default(),
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        jwt: JwtConfig::default(),
        cookies: CookieConfig::default(),
        policy: PolicyConfig::default(),
    };
    let app = create_router(AppState::new(db, &config).unwrap());

    let response = send(
        &app,
        Request::builder().uri("/auth/login").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<title>Sign in | RepairDesk</title>"));
}
