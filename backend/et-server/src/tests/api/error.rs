use crate::ApiError;

use et_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_envelope() {
    let (status, json) = body_json(ApiError::not_found("User not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_validation_error_returns_400_without_field_details() {
    let (status, json) =
        body_json(ApiError::validation("from", "Invalid from date format")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid from date format");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "disk I/O error");
}

#[tokio::test]
async fn test_rejected_error_keeps_status_200() {
    let error = ApiError::validation("username", "username is required").into_rejected();
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "username is required");
}

#[test]
fn test_into_rejected_is_idempotent() {
    let error = ApiError::not_found("gone").into_rejected().into_rejected();

    assert_eq!(error.status(), StatusCode::OK);
    assert_eq!(error.message(), "gone");
}

#[test]
fn test_core_validation_maps_to_validation_with_field() {
    let error = ApiError::from(CoreError::validation("username", "username cannot be blank"));

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "username cannot be blank");
            assert_eq!(field.as_deref(), Some("username"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_invalid_date_maps_to_bad_request() {
    let error = ApiError::from(CoreError::invalid_date("yesterday"));

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.message().contains("yesterday"));
}
