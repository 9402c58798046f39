use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::domains::rpc::models::{Middleware, Procedure, RpcCall, RpcError, RpcErrorCode};
use crate::domains::rpc::services::context::RpcContext;
use crate::shared::clients::BffClient;

// RPC 서비스
// 역할: 타입이 있는 프로시저를 HTTP 엔드포인트 호출로 변환 (tRPC 라우터 같은 것)
// RpcService: resolves typed procedures by forwarding them to the HTTP surface
#[derive(Clone)]
pub struct RpcService {
    client: BffClient,
}

impl RpcService {
    pub fn new(client: BffClient) -> Self {
        Self { client }
    }

    /// 미들웨어 체인을 거쳐 프로시저 실행
    /// Run a call through its middleware chain (base / logger / logger -> protected)
    pub async fn call(&self, ctx: &RpcContext, call: RpcCall) -> Result<Value, RpcError> {
        let procedure = call.procedure();
        debug!(path = procedure.path(), request_id = %ctx.request_id, "rpc call");

        match procedure.middleware() {
            Middleware::Base => self.resolve(ctx, call).await,
            Middleware::Logger | Middleware::Protected => self.logged(ctx, procedure, call).await,
        }
    }

    /// Logger 미들웨어: 에러만 로깅
    async fn logged(
        &self,
        ctx: &RpcContext,
        procedure: Procedure,
        call: RpcCall,
    ) -> Result<Value, RpcError> {
        let start = Instant::now();

        let result = match Self::guard(ctx, procedure) {
            Ok(()) => self.resolve(ctx, call).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            warn!(
                path = procedure.path(),
                kind = %procedure.kind(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id,
                error = %err,
                "rpc procedure failed"
            );
        }

        result
    }

    /// Protected 미들웨어: access token 이 없으면 거부
    fn guard(ctx: &RpcContext, procedure: Procedure) -> Result<(), RpcError> {
        if procedure.middleware() == Middleware::Protected {
            Self::require_access_token(ctx)?;
        }
        Ok(())
    }

    fn require_access_token(ctx: &RpcContext) -> Result<&str, RpcError> {
        ctx.access_token.as_deref().ok_or_else(|| {
            RpcError::unauthorized("Authentication required. Provide an access token.")
        })
    }

    async fn resolve(&self, ctx: &RpcContext, call: RpcCall) -> Result<Value, RpcError> {
        match call {
            RpcCall::Health => to_value(self.client.health().await?),
            RpcCall::Hello => to_value(self.client.hello().await?),
            RpcCall::Login(input) => to_value(self.client.login(&input.user_id).await?),
            RpcCall::RefreshToken(input) => {
                to_value(self.client.refresh_token(&input.refresh_token).await?)
            }
            RpcCall::Logout(input) => to_value(self.client.logout(&input.user_id).await?),
            RpcCall::GetProtectedData => {
                let access_token = Self::require_access_token(ctx)?;
                let data = self.client.get_protected_data(access_token).await?;
                Ok(json!({
                    "data": data,
                    "accessToken": access_token,
                }))
            }
            RpcCall::GetAllTokens => to_value(self.client.get_all_tokens().await?),
            RpcCall::GetTokenByUserId(input) => {
                to_value(self.client.get_token_by_user_id(&input.user_id).await?)
            }
            RpcCall::GetSharedCounter => to_value(self.client.get_shared_counter().await?),
            RpcCall::ChangeSharedCounter(action) => {
                to_value(self.client.change_shared_counter(action).await?)
            }
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| {
        RpcError::new(
            RpcErrorCode::InternalServerError,
            format!("Failed to serialize result: {}", e),
        )
    })
}
