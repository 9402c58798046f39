// Auth domain state
// 인증 도메인 상태
use crate::domains::auth::services::{AuthService, JwtService};
use crate::shared::config::AuthConfig;
use crate::shared::database::Database;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
}

impl AuthState {
    /// Create AuthState with database and signing secrets
    /// AuthState 생성 (데이터베이스와 서명 키 설정 필요)
    pub fn new(db: Database, config: &AuthConfig) -> Self {
        Self {
            auth_service: AuthService::new(db, JwtService::new(config)),
        }
    }
}
