use axum::http::HeaderMap;
use uuid::Uuid;

use crate::shared::middleware::auth::bearer_token;

/// RPC 요청 컨텍스트 (요청마다 새로 생성)
/// Per-request context handed to every procedure
#[derive(Debug, Clone)]
pub struct RpcContext {
    /// `Authorization: Bearer <token>` 의 token 부분
    pub access_token: Option<String>,
    pub request_id: Uuid,
}

impl RpcContext {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            access_token: bearer_token(headers),
            request_id: Uuid::new_v4(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            access_token: None,
            request_id: Uuid::new_v4(),
        }
    }
}
