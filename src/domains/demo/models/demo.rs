use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// 헬스 체크 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,

    /// RFC 3339 timestamp
    #[schema(example = "2026-10-19T12:00:00.000Z")]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FrameworkInfo {
    #[schema(example = "axum")]
    pub framework: String,
    #[schema(example = "0.7")]
    pub version: String,
}

// Hello 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
    pub data: FrameworkInfo,
}

/// 데이터 조회 파라미터 (id 는 문자열로 받아서 직접 검증)
/// Query for GET /api/data; `id` is parsed by the handler so a bad value yields a 400 `{error}`
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DataQuery {
    /// 조회할 아이템 ID
    /// Item id (non-negative integer)
    #[param(example = "1")]
    pub id: Option<String>,
}

// 데이터 조회 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse {
    pub id: u64,
    #[schema(example = "Data for item 1")]
    pub data: String,
    /// 응답 생성 시각 (Unix millis)
    pub timestamp: i64,
}

// 클라이언트 IP 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpResponse {
    /// x-forwarded-for, x-real-ip 순으로 선택 (둘 다 없으면 "IP not available")
    pub ip: String,
    pub forwarded: Option<String>,
    pub real_ip: Option<String>,
    pub user_agent: Option<String>,
}

/// 프로세스 전체가 공유하는 카운터 상태
/// Process-wide counter snapshot; every caller sees every other caller's mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    pub server_count: i64,
    /// 마지막 변경 시 새로 생성되는 ID
    #[schema(example = "req-1760870400000-3f9a2c1be")]
    pub request_id: String,
    /// 마지막 변경 시각 (RFC 3339)
    pub timestamp: String,
}

// 카운터 변경 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
