use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 토큰 저장소 레코드 (userId 당 하나)
/// Token store record, at most one per userId
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    #[schema(example = "u1")]
    pub user_id: String,

    /// 현재 유효한 Access Token (refresh 시 교체)
    /// Current access token, replaced in place on refresh
    pub access_token: String,

    /// 로그인 시 발급된 Refresh Token (refresh 시 변하지 않음)
    /// Refresh token issued at login, unchanged by refresh
    pub refresh_token: String,

    /// 로그인 시각
    pub created_at: DateTime<Utc>,
}

/// 전체 토큰 조회 응답 (개발용)
/// Full store dump (development inspection only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokensResponse {
    pub count: usize,
    /// userId -> 레코드 (userId 순 정렬)
    pub tokens: BTreeMap<String, TokenRecord>,
}

impl From<BTreeMap<String, TokenRecord>> for TokensResponse {
    fn from(tokens: BTreeMap<String, TokenRecord>) -> Self {
        Self {
            count: tokens.len(),
            tokens,
        }
    }
}
