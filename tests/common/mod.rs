// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// - test_app(): 라우터를 직접 호출 (tower::ServiceExt::oneshot)
// - spawn_server(): 127.0.0.1:0 에 실제 서버 기동 (RPC / 하네스 테스트용)
// =====================================================
#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use bff_server::app::build_app;
use bff_server::shared::config::AppConfig;
use bff_server::shared::database::Database;
use bff_server::shared::services::AppState;

/// 테스트용 /api/data 지연
pub const TEST_DATA_DELAY: Duration = Duration::from_millis(20);

/// 테스트 설정 (짧은 지연, 기본 dev 시크릿)
pub fn test_config() -> AppConfig {
    AppConfig {
        data_delay: TEST_DATA_DELAY,
        ..AppConfig::default()
    }
}

/// 테스트마다 독립적인 토큰 저장소를 가진 앱 생성
pub fn test_app() -> Router {
    app_with_config(&test_config())
}

pub fn app_with_config(config: &AppConfig) -> Router {
    let state = AppState::new(Database::new(), config).expect("Failed to initialize AppState");
    build_app(state, config).expect("Failed to build app")
}

/// 요청 한 건 실행 후 (상태, JSON 본문) 반환
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

/// 이미 만들어진 요청 실행 (헤더를 직접 다루는 테스트용)
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router call failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body), None).await
}

/// 127.0.0.1:0 에 서버를 띄우고 base URL 반환
/// RPC 포워딩 대상(BFF_API_URL)도 자기 자신으로 설정
pub async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    let base_url = format!("http://{addr}");

    let config = AppConfig {
        port: addr.port(),
        bff_api_url: base_url.clone(),
        ..test_config()
    };
    let app = app_with_config(&config);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    base_url
}
