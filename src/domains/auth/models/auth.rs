use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::AuthError;

/// Access Token 수명 (초)
/// Access token lifetime in seconds
pub const ACCESS_TOKEN_EXPIRES_IN: i64 = 900;

/// Refresh Token 수명 (초, 7일)
pub const REFRESH_TOKEN_EXPIRES_IN: i64 = 7 * 24 * 60 * 60;

/// 필수 문자열 필드 확인 (없거나 공백이면 에러)
/// Required string field check: missing or blank is a validation error
pub fn require_field<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, AuthError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AuthError::MissingField { field }),
    }
}

// 로그인 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// User ID
    /// 사용자 ID
    #[schema(example = "u1")]
    pub user_id: Option<String>,
}

impl LoginRequest {
    pub fn user_id(&self) -> Result<&str, AuthError> {
        require_field(self.user_id.as_deref(), "userId")
    }
}

// 로그인 응답 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = LoginResponse)]
pub struct LoginResponse {
    /// JWT Access Token (15분)
    /// JWT Access Token (15 minutes)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT Refresh Token (7일)
    /// JWT Refresh Token (7 days)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,

    /// Access Token 만료까지 남은 초
    #[schema(example = 900)]
    pub expires_in: i64,
}

// 토큰 갱신 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[schema(as = RefreshTokenRequest)]
pub struct RefreshTokenRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: Option<String>,
}

impl RefreshTokenRequest {
    pub fn refresh_token(&self) -> Result<&str, AuthError> {
        require_field(self.refresh_token.as_deref(), "refreshToken")
    }
}

// 토큰 갱신 응답 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RefreshTokenResponse)]
pub struct RefreshTokenResponse {
    /// 새 Access Token
    /// New Access Token
    pub access_token: String,

    #[schema(example = 900)]
    pub expires_in: i64,
}

// 로그아웃 요청 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[schema(as = LogoutRequest)]
pub struct LogoutRequest {
    #[schema(example = "u1")]
    pub user_id: Option<String>,
}

impl LogoutRequest {
    pub fn user_id(&self) -> Result<&str, AuthError> {
        require_field(self.user_id.as_deref(), "userId")
    }
}

/// 단순 메시지 응답 (로그아웃 등)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = MessageResponse)]
pub struct MessageResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 보호된 리소스 응답
/// Protected resource response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ProtectedResponse)]
pub struct ProtectedResponse {
    #[schema(example = "Protected data accessed successfully")]
    pub message: String,

    /// 토큰 claim 에서 꺼낸 사용자 ID
    /// User ID decoded from the verified claim
    #[schema(example = "u1")]
    pub user_id: String,
}
