// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::{create_auth_router, create_protected_router};
use crate::domains::demo::routes::create_demo_router;
use crate::domains::rpc::routes::create_rpc_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .merge(create_protected_router())
        .merge(create_demo_router())
        .merge(create_rpc_router())
}
