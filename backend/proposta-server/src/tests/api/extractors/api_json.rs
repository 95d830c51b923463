use crate::{ApiError, ApiJson};

use axum::{body::Body, extract::FromRequest, http::Request};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Payload {
    titulo: String,
}

fn json_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_valid_body_is_extracted() {
    let request = json_request(r#"{"titulo":"A"}"#);

    let ApiJson(payload) = ApiJson::<Payload>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(payload.titulo, "A");
}

#[tokio::test]
async fn test_syntax_error_is_validation_error() {
    let result = ApiJson::<Payload>::from_request(json_request("{not json"), &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let result = ApiJson::<Payload>::from_request(json_request("{}"), &()).await;

    match result {
        Err(ApiError::Validation { message, .. }) => assert!(message.contains("titulo")),
        Err(other) => panic!("expected Validation, got {other:?}"),
        Ok(_) => panic!("expected rejection"),
    }
}

#[tokio::test]
async fn test_missing_content_type_is_validation_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"titulo":"A"}"#))
        .unwrap();

    let result = ApiJson::<Payload>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}
