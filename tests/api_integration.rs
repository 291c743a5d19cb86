//! Integration tests for the HTTP surface.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use echo_service::{Config, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn setup() -> axum::Router {
    build_router(&Config::default())
}

async fn send(app: axum::Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn post_echo(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/echo")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

#[tokio::test]
async fn test_health_check() {
    let response = send(
        setup(),
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_echo_round_trips_payload() {
    let payload = json!({"hello": "world", "answer": 42});
    let response = send(setup(), post_echo(payload.to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));
    assert_eq!(body_json(response).await, payload);
}

#[tokio::test]
async fn test_echo_without_body_returns_empty_object() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(is_json(&response));
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_echo_empty_object() {
    let response = send(setup(), post_echo("{}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"{}");
}

#[tokio::test]
async fn test_echo_invalid_json_returns_empty_object() {
    let response = send(setup(), post_echo("{\"unterminated\": ")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_echo_nested_object() {
    let payload = json!({"user": {"name": "test", "settings": {"theme": "dark"}}});
    let response = send(setup(), post_echo(payload.to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, payload);
}

#[tokio::test]
async fn test_echo_preserves_array_order() {
    let response = send(setup(), post_echo(r#"{"items":[1,2,3,4,5]}"#)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"items": [1, 2, 3, 4, 5]}));
}

#[tokio::test]
async fn test_echo_preserves_key_order_exactly() {
    let raw = r#"{"zeta":1,"alpha":{"y":true,"b":null},"mid":["x",2.5,-3]}"#;
    let response = send(setup(), post_echo(raw)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(String::from_utf8(body_bytes(response).await).unwrap(), raw);
}

#[tokio::test]
async fn test_echo_preserves_numbers_beyond_64_bits() {
    for raw in [
        r#"{"n":12345678901234567890123}"#,
        r#"{"n":-9223372036854775809}"#,
        r#"{"f":0.1000000000000000055511151231257827}"#,
    ] {
        let response = send(setup(), post_echo(raw)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(String::from_utf8(body_bytes(response).await).unwrap(), raw);
    }
}

#[tokio::test]
async fn test_echo_ignores_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"hello":"world"}"#))
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"hello": "world"}));
}

#[tokio::test]
async fn test_post_health_is_method_not_allowed() {
    let request = Request::builder()
        .method("POST")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_get_echo_is_method_not_allowed() {
    let request = Request::builder()
        .uri("/echo")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "method GET not allowed");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/nonexistent")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(is_json(&response));
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "no route for /nonexistent");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(!id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = send(setup(), request).await;

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let config = Config {
        body_limit_bytes: 16,
        ..Config::default()
    };
    let app = build_router(&config);

    let payload = json!({"padding": "x".repeat(64)}).to_string();
    let response = send(app, post_echo(payload)).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
