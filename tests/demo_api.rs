// =====================================================
// 데모 엔드포인트 통합 테스트 (health, hello, data, ip, swagger)
// =====================================================

mod common;

use std::time::Instant;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_hello() {
    let app = test_app();

    let (status, body) = get(&app, "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Hello from the BFF server!",
            "data": { "framework": "axum", "version": "0.7" }
        })
    );
}

#[tokio::test]
async fn test_data_waits_for_delay() {
    let app = test_app();

    let start = Instant::now();
    let (status, body) = get(&app, "/api/data?id=7").await;
    assert!(start.elapsed() >= TEST_DATA_DELAY);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
    assert_eq!(body["data"], "Data for item 7");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_data_requires_numeric_id() {
    let app = test_app();

    let (status, body) = get(&app, "/api/data").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "id is required");

    let (status, body) = get(&app, "/api/data?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "id is required");
}

#[tokio::test]
async fn test_ip_prefers_forwarded_header() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/ip")
        .header("x-forwarded-for", "203.0.113.9")
        .header("x-real-ip", "10.0.0.1")
        .header("user-agent", "bff-test")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "203.0.113.9");
    assert_eq!(body["forwarded"], "203.0.113.9");
    assert_eq!(body["realIp"], "10.0.0.1");
    assert_eq!(body["userAgent"], "bff-test");
}

#[tokio::test]
async fn test_ip_without_proxy_headers() {
    let app = test_app();

    let (status, body) = get(&app, "/api/ip").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "IP not available");
    assert!(body["forwarded"].is_null());
}

#[tokio::test]
async fn test_ip_skips_empty_forwarded_header() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/ip")
        .header("x-forwarded-for", "")
        .header("x-real-ip", "10.0.0.1")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ip"], "10.0.0.1");
    assert_eq!(body["forwarded"], "");
}

#[tokio::test]
async fn test_shared_counter_is_shared_between_callers() {
    // 같은 서버에 붙은 두 호출자 (서로 다른 Router clone)
    let app = test_app();
    let alice = app.clone();
    let bob = app.clone();

    let (_, initial) = get(&alice, "/api/shared-counter").await;
    assert_eq!(initial["serverCount"], 0);

    let (status, body) = post(&alice, "/api/shared-counter/increment", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
    post(&alice, "/api/shared-counter/increment", json!({})).await;

    // bob 은 아무것도 안 했지만 alice 의 변경이 보임
    let (status, seen_by_bob) = get(&bob, "/api/shared-counter").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(seen_by_bob["serverCount"], 2);
    assert_ne!(seen_by_bob["requestId"], initial["requestId"]);
    assert!(chrono::DateTime::parse_from_rfc3339(seen_by_bob["timestamp"].as_str().unwrap()).is_ok());

    post(&bob, "/api/shared-counter/decrement", json!({})).await;
    let (_, seen_by_alice) = get(&alice, "/api/shared-counter").await;
    assert_eq!(seen_by_alice["serverCount"], 1);

    post(&bob, "/api/shared-counter/reset", json!({})).await;
    let (_, after_reset) = get(&alice, "/api/shared-counter").await;
    assert_eq!(after_reset["serverCount"], 0);
}

#[tokio::test]
async fn test_shared_counter_is_per_app() {
    let first = test_app();
    let second = test_app();

    post(&first, "/api/shared-counter/increment", json!({})).await;

    let (_, body) = get(&second, "/api/shared-counter").await;
    assert_eq!(body["serverCount"], 0);
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = test_app();

    let (status, doc) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/auth/login",
        "/api/protected",
        "/api/rpc",
        "/api/shared-counter",
        "/api/shared-counter/increment",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(doc["components"]["securitySchemes"]["BearerAuth"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app();

    let (status, _) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
