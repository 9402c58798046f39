use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::domains::demo::models::{
    CounterSnapshot, DataQuery, DataResponse, FrameworkInfo, HealthResponse, HelloResponse,
    IpResponse, SuccessResponse,
};
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

// 헬스 체크 핸들러
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// Hello 핸들러 (간단한 테스트용 엔드포인트)
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = HelloResponse)
    ),
    tag = "Example"
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from the BFF server!".to_string(),
        data: FrameworkInfo {
            framework: "axum".to_string(),
            version: "0.7".to_string(),
        },
    })
}

/// 데이터 조회 핸들러 (고정 지연 후 응답)
/// Data handler: answers after a fixed artificial delay, used by the timing harness
#[utoipa::path(
    get,
    path = "/api/data",
    params(DataQuery),
    responses(
        (status = 200, description = "Item data", body = DataResponse),
        (status = 400, description = "Missing or invalid id")
    ),
    tag = "Example"
)]
pub async fn get_data(
    State(app_state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<DataResponse>, (StatusCode, Json<serde_json::Value>)> {
    let id = query
        .id
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .ok_or(AuthError::MissingField { field: "id" })?;

    let delay = app_state.demo_state.data_delay;
    debug!(id, delay_ms = delay.as_millis() as u64, "serving delayed data");
    tokio::time::sleep(delay).await;

    Ok(Json(DataResponse {
        id,
        data: format!("Data for item {}", id),
        timestamp: Utc::now().timestamp_millis(),
    }))
}

/// 클라이언트 IP 조회 핸들러 (프록시 헤더 기준)
/// Client IP as seen through proxy headers
#[utoipa::path(
    get,
    path = "/api/ip",
    responses(
        (status = 200, description = "Client address information", body = IpResponse)
    ),
    tag = "Example"
)]
pub async fn get_ip(headers: HeaderMap) -> Json<IpResponse> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let forwarded = header("x-forwarded-for");
    let real_ip = header("x-real-ip");
    // 빈 헤더 값은 없는 것으로 보고 다음 후보로 넘어감
    let ip = [&forwarded, &real_ip]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| "IP not available".to_string());

    Json(IpResponse {
        ip,
        forwarded,
        real_ip,
        user_agent: header("user-agent"),
    })
}

// 공유 카운터 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/shared-counter",
    responses(
        (status = 200, description = "Current process-wide counter", body = CounterSnapshot)
    ),
    tag = "Example"
)]
pub async fn get_shared_counter(State(app_state): State<AppState>) -> Json<CounterSnapshot> {
    Json(app_state.demo_state.shared_counter.snapshot())
}

/// 공유 카운터 증가
/// Increment the counter shared by every caller
#[utoipa::path(
    post,
    path = "/api/shared-counter/increment",
    responses(
        (status = 200, description = "Counter incremented", body = SuccessResponse)
    ),
    tag = "Example"
)]
pub async fn increment_shared_counter(State(app_state): State<AppState>) -> Json<SuccessResponse> {
    app_state.demo_state.shared_counter.increment();
    Json(SuccessResponse::ok())
}

#[utoipa::path(
    post,
    path = "/api/shared-counter/decrement",
    responses(
        (status = 200, description = "Counter decremented", body = SuccessResponse)
    ),
    tag = "Example"
)]
pub async fn decrement_shared_counter(State(app_state): State<AppState>) -> Json<SuccessResponse> {
    app_state.demo_state.shared_counter.decrement();
    Json(SuccessResponse::ok())
}

#[utoipa::path(
    post,
    path = "/api/shared-counter/reset",
    responses(
        (status = 200, description = "Counter reset to zero", body = SuccessResponse)
    ),
    tag = "Example"
)]
pub async fn reset_shared_counter(State(app_state): State<AppState>) -> Json<SuccessResponse> {
    app_state.demo_state.shared_counter.reset();
    Json(SuccessResponse::ok())
}
