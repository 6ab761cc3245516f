use crate::{ApiError, JsonOrForm};

use axum::{
    body::Body,
    extract::{FromRequest, Request},
    http::header,
};
use http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Payload {
    username: Option<String>,
}

fn request(content_type: &str, body: &'static str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_json_body_is_deserialized() {
    let req = request("application/json", r#"{"username":"alice"}"#);

    let JsonOrForm(payload) = JsonOrForm::<Payload>::from_request(req, &()).await.unwrap();

    assert_eq!(payload.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_form_body_is_deserialized() {
    let req = request("application/x-www-form-urlencoded", "username=bob+smith");

    let JsonOrForm(payload) = JsonOrForm::<Payload>::from_request(req, &()).await.unwrap();

    assert_eq!(payload.username.as_deref(), Some("bob smith"));
}

#[tokio::test]
async fn test_form_content_type_with_charset_is_accepted() {
    let req = request(
        "application/x-www-form-urlencoded; charset=UTF-8",
        "username=carol",
    );

    let JsonOrForm(payload) = JsonOrForm::<Payload>::from_request(req, &()).await.unwrap();

    assert_eq!(payload.username.as_deref(), Some("carol"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let req = request("application/json", "{not json");

    let result = JsonOrForm::<Payload>::from_request(req, &()).await;

    match result {
        Err(error @ ApiError::BadRequest { .. }) => {
            assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        }
        Err(other) => panic!("Expected BadRequest, got {:?}", other),
        Ok(_) => panic!("Expected BadRequest, got a payload"),
    }
}
