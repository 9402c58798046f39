// RPC domain routes
// RPC 라우터
use axum::{routing::post, Router};

use crate::domains::rpc::handlers::rpc_handler;
use crate::shared::services::AppState;

/// Create RPC router (absolute path, merged at the root)
/// RPC 라우터 생성
pub fn create_rpc_router() -> Router<AppState> {
    Router::new().route("/api/rpc", post(rpc_handler::rpc))
}
