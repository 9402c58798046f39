use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::domains::auth::models::{
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, ProtectedResponse,
    RefreshTokenRequest, RefreshTokenResponse, TokenRecord, TokensResponse,
};
use crate::shared::middleware::auth::authorization_header;
use crate::shared::middleware::ValidatedJson;
use crate::shared::services::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<serde_json::Value>)>;

// 로그인 핸들러
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token pair issued", body = LoginResponse),
        (status = 400, description = "Missing userId or malformed body")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    // Service 호출 (비즈니스 로직)
    let response = app_state
        .auth_state
        .auth_service
        .login(request.user_id()?)?;

    Ok(Json(response))
}

/// 토큰 갱신 핸들러
/// Refresh token handler
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Access token refreshed", body = RefreshTokenResponse),
        (status = 400, description = "Missing refreshToken"),
        (status = 401, description = "Invalid, expired or revoked refresh token")
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<RefreshTokenResponse> {
    let response = app_state
        .auth_state
        .auth_service
        .refresh(request.refresh_token()?)?;

    Ok(Json(response))
}

/// 로그아웃 핸들러
/// Logout handler
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out (idempotent)", body = MessageResponse),
        (status = 400, description = "Missing userId")
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LogoutRequest>,
) -> ApiResult<MessageResponse> {
    let response = app_state
        .auth_state
        .auth_service
        .logout(request.user_id()?)?;

    Ok(Json(response))
}

// 전체 토큰 조회 핸들러 (개발용)
#[utoipa::path(
    get,
    path = "/api/auth/tokens",
    responses(
        (status = 200, description = "Every stored token record", body = TokensResponse)
    ),
    tag = "Auth"
)]
pub async fn list_tokens(State(app_state): State<AppState>) -> Json<TokensResponse> {
    Json(app_state.auth_state.auth_service.list_tokens())
}

// 특정 유저 토큰 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/auth/tokens/{userId}",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Token record", body = TokenRecord),
        (status = 404, description = "No token for this user")
    ),
    tag = "Auth"
)]
pub async fn get_token(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<TokenRecord> {
    let record = app_state
        .auth_state
        .auth_service
        .get_token_by_user_id(&user_id)?;

    Ok(Json(record))
}

/// 보호된 리소스 핸들러 (Access Token 필요)
/// Protected resource handler. Only the token itself is checked, not the token store.
#[utoipa::path(
    get,
    path = "/api/protected",
    responses(
        (status = 200, description = "Protected data", body = ProtectedResponse),
        (status = 401, description = "Missing, invalid or expired access token")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_protected(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<ProtectedResponse> {
    let response = app_state
        .auth_state
        .auth_service
        .get_protected_resource(authorization_header(&headers))?;

    Ok(Json(response))
}
