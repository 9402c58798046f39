// Auth domain routes
// 인증 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::auth::handlers::auth_handler;
use crate::shared::services::AppState;

/// Create authentication router (nested under /api/auth)
/// 인증 라우터 생성
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth_handler::login))
        .route("/refresh", post(auth_handler::refresh))
        .route("/logout", post(auth_handler::logout))
        .route("/tokens", get(auth_handler::list_tokens))
        .route("/tokens/:user_id", get(auth_handler::get_token))
}

/// Create protected resource router (absolute path, merged at the root)
/// 보호된 리소스 라우터 생성
pub fn create_protected_router() -> Router<AppState> {
    Router::new().route("/api/protected", get(auth_handler::get_protected))
}
