#![allow(dead_code)]

//! Test infrastructure for et-server API tests

use et_config::AssetsConfig;
use et_db::Database;
use et_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState backed by a private in-memory database, serving the
/// crate's own landing page and assets.
pub async fn create_test_app_state() -> AppState {
    let database = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");

    let assets = AssetsConfig {
        views_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/views").to_string(),
        public_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string(),
    };

    AppState::new(database, assets)
}

/// Send a request through a fresh router and decode the JSON body.
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Create a user through the API and return its id
pub async fn create_test_user(state: &AppState, username: &str) -> String {
    let (status, json) = send(
        state,
        post_json("/api/users", serde_json::json!({ "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["_id"].as_str().expect("user id").to_string()
}

/// Log an exercise through the API
pub async fn log_test_exercise(
    state: &AppState,
    user_id: &str,
    description: &str,
    duration: i64,
    date: &str,
) {
    let (status, _) = send(
        state,
        post_json(
            &format!("/api/users/{}/exercises", user_id),
            serde_json::json!({
                "description": description,
                "duration": duration,
                "date": date,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
