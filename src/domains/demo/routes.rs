// Demo domain routes
// 데모 엔드포인트 라우터
use axum::{
    routing::{get, post},
    Router,
};

use crate::domains::demo::handlers::demo_handler;
use crate::shared::services::AppState;

/// Create demo router (absolute paths, merged at the root)
/// 데모 라우터 생성
pub fn create_demo_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(demo_handler::health))
        .route("/api/hello", get(demo_handler::hello))
        .route("/api/data", get(demo_handler::get_data))
        .route("/api/ip", get(demo_handler::get_ip))
        .route("/api/shared-counter", get(demo_handler::get_shared_counter))
        .route(
            "/api/shared-counter/increment",
            post(demo_handler::increment_shared_counter),
        )
        .route(
            "/api/shared-counter/decrement",
            post(demo_handler::decrement_shared_counter),
        )
        .route("/api/shared-counter/reset", post(demo_handler::reset_shared_counter))
}
