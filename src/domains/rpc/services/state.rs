// RPC domain state
// RPC 도메인 상태
use crate::domains::rpc::services::RpcService;
use crate::shared::clients::BffClient;

/// RPC domain state
/// 프로시저를 HTTP 엔드포인트로 포워딩하는 서비스 보관
#[derive(Clone)]
pub struct RpcState {
    pub rpc_service: RpcService,
}

impl RpcState {
    pub fn new(client: BffClient) -> Self {
        Self {
            rpc_service: RpcService::new(client),
        }
    }
}
