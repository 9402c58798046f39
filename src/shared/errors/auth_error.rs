use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 에러 분류 (HTTP 상태 코드와 1:1 대응)
/// Error category (maps 1:1 onto an HTTP status)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 필수 필드 누락 / 잘못된 요청 본문 (400)
    Validation,
    /// 토큰 누락 / 무효 / 만료 / 불일치 (401)
    Auth,
    /// 존재하지 않는 userId 조회 (404)
    NotFound,
    /// 토큰 서명 실패 등 서버 내부 오류 (500)
    Internal,
}

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// 필수 필드가 없거나 비어 있음
    /// Required field missing or empty
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// 요청 본문을 해석할 수 없음 (알 수 없는 필드, 잘못된 JSON 등)
    /// Request body rejected before reaching business logic
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authorization 헤더 없음
    /// Authorization header not provided
    #[error("Missing authorization header")]
    MissingToken,

    /// "Bearer <token>" 형식이 아님
    #[error("Invalid authorization format. Expected: 'Bearer <token>'")]
    InvalidAuthorizationFormat,

    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("Invalid or expired token")]
    InvalidToken,

    /// 서명은 유효하지만 저장된 세션과 일치하지 않는 refresh token
    /// (로그아웃 이후이거나 재로그인으로 교체된 토큰)
    /// Refresh token that verifies but no longer matches the stored session
    #[error("Refresh token has been revoked")]
    RevokedRefreshToken,

    /// 해당 사용자의 토큰이 없음
    /// No token record for user
    #[error("Token not found for user: {user_id}")]
    TokenNotFound { user_id: String },

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingField { .. } | AuthError::InvalidRequest(_) => ErrorKind::Validation,
            AuthError::MissingToken
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken
            | AuthError::RevokedRefreshToken => ErrorKind::Auth,
            AuthError::TokenNotFound { .. } => ErrorKind::NotFound,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Auth => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// AuthError를 HTTP 응답으로 변환
/// Converts AuthError into the `{ "error": message }` response body
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        (err.status_code(), Json(json!({ "error": err.to_string() })))
    }
}
