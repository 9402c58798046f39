use anyhow::{Context, Result};

use crate::domains::auth::services::state::AuthState;
use crate::domains::demo::services::state::DemoState;
use crate::domains::rpc::services::state::RpcState;
use crate::shared::clients::BffClient;
use crate::shared::config::AppConfig;
use crate::shared::database::Database;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: NestJS의 Module에서 모든 Service를 주입하는 것과 유사
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub auth_state: AuthState,
    pub demo_state: DemoState,
    pub rpc_state: RpcState,
}

impl AppState {
    /// Create AppState with database and configuration
    /// 모든 도메인 State를 초기화하고 조합 (토큰 저장소는 AuthState 가 소유)
    pub fn new(db: Database, config: &AppConfig) -> Result<Self> {
        // 1. 공유 클라이언트 생성 (RPC -> HTTP 포워딩용)
        let bff_client = BffClient::new(&config.bff_api_url)
            .with_context(|| format!("Failed to create BFF client for {}", config.bff_api_url))?;

        // 2. 각 도메인 State 생성
        Ok(Self {
            auth_state: AuthState::new(db, &config.auth),
            demo_state: DemoState::new(config.data_delay),
            rpc_state: RpcState::new(bff_client),
        })
    }
}
