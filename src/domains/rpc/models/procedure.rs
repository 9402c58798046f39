use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domains::rpc::models::error::RpcError;
use crate::domains::rpc::models::jsonrpc::JsonRpcError;
use crate::shared::clients::CounterAction;

/// 프로시저 종류 (query: 조회, mutation: 변경)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcedureKind::Query => f.write_str("query"),
            ProcedureKind::Mutation => f.write_str("mutation"),
        }
    }
}

/// 프로시저에 적용되는 미들웨어 체인
/// Middleware chain applied before a procedure runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Middleware {
    /// 미들웨어 없음
    Base,
    /// 실패 시 path/kind/duration/error 로깅
    Logger,
    /// Logger 안에서 access token 존재 확인
    Protected,
}

/// RPC 프로시저 목록 (HTTP 엔드포인트와 1:1)
/// RPC procedures, one per HTTP endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Health,
    Hello,
    Login,
    RefreshToken,
    Logout,
    GetProtectedData,
    GetAllTokens,
    GetTokenByUserId,
    GetSharedCounter,
    IncrementSharedCounter,
    DecrementSharedCounter,
    ResetSharedCounter,
}

impl Procedure {
    pub const ALL: [Procedure; 12] = [
        Procedure::Health,
        Procedure::Hello,
        Procedure::Login,
        Procedure::RefreshToken,
        Procedure::Logout,
        Procedure::GetProtectedData,
        Procedure::GetAllTokens,
        Procedure::GetTokenByUserId,
        Procedure::GetSharedCounter,
        Procedure::IncrementSharedCounter,
        Procedure::DecrementSharedCounter,
        Procedure::ResetSharedCounter,
    ];

    /// JSON-RPC method 이름
    pub fn path(self) -> &'static str {
        match self {
            Procedure::Health => "health",
            Procedure::Hello => "hello",
            Procedure::Login => "auth.login",
            Procedure::RefreshToken => "auth.refreshToken",
            Procedure::Logout => "auth.logout",
            Procedure::GetProtectedData => "auth.getProtectedData",
            Procedure::GetAllTokens => "auth.getAllTokens",
            Procedure::GetTokenByUserId => "auth.getTokenByUserId",
            Procedure::GetSharedCounter => "sharedCounter.get",
            Procedure::IncrementSharedCounter => "sharedCounter.increment",
            Procedure::DecrementSharedCounter => "sharedCounter.decrement",
            Procedure::ResetSharedCounter => "sharedCounter.reset",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|procedure| procedure.path() == path)
    }

    pub fn kind(self) -> ProcedureKind {
        match self {
            Procedure::Login
            | Procedure::RefreshToken
            | Procedure::Logout
            | Procedure::IncrementSharedCounter
            | Procedure::DecrementSharedCounter
            | Procedure::ResetSharedCounter => ProcedureKind::Mutation,
            _ => ProcedureKind::Query,
        }
    }

    pub fn middleware(self) -> Middleware {
        match self {
            Procedure::Login | Procedure::RefreshToken | Procedure::Logout => Middleware::Logger,
            Procedure::GetProtectedData => Middleware::Protected,
            Procedure::Health
            | Procedure::Hello
            | Procedure::GetAllTokens
            | Procedure::GetTokenByUserId
            | Procedure::GetSharedCounter
            | Procedure::IncrementSharedCounter
            | Procedure::DecrementSharedCounter
            | Procedure::ResetSharedCounter => Middleware::Base,
        }
    }
}

/// `{ userId }` 입력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserIdInput {
    pub user_id: String,
}

/// `{ refreshToken }` 입력
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshTokenInput {
    pub refresh_token: String,
}

/// 입력까지 해석된 프로시저 호출
/// A procedure call with its typed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
    Health,
    Hello,
    Login(UserIdInput),
    RefreshToken(RefreshTokenInput),
    Logout(UserIdInput),
    GetProtectedData,
    GetAllTokens,
    GetTokenByUserId(UserIdInput),
    GetSharedCounter,
    ChangeSharedCounter(CounterAction),
}

impl RpcCall {
    /// method + params 를 타입이 있는 호출로 변환
    /// Unknown method -> -32601, input that does not match the schema -> -32602
    pub fn parse(method: &str, params: Value) -> Result<Self, JsonRpcError> {
        let procedure =
            Procedure::from_path(method).ok_or_else(|| JsonRpcError::method_not_found(method))?;

        let call = match procedure {
            Procedure::Health => no_input(&params).map(|_| RpcCall::Health),
            Procedure::Hello => no_input(&params).map(|_| RpcCall::Hello),
            Procedure::Login => input(params).map(RpcCall::Login),
            Procedure::RefreshToken => input(params).map(RpcCall::RefreshToken),
            Procedure::Logout => input(params).map(RpcCall::Logout),
            Procedure::GetProtectedData => no_input(&params).map(|_| RpcCall::GetProtectedData),
            Procedure::GetAllTokens => no_input(&params).map(|_| RpcCall::GetAllTokens),
            Procedure::GetTokenByUserId => input(params).map(RpcCall::GetTokenByUserId),
            Procedure::GetSharedCounter => no_input(&params).map(|_| RpcCall::GetSharedCounter),
            Procedure::IncrementSharedCounter => no_input(&params)
                .map(|_| RpcCall::ChangeSharedCounter(CounterAction::Increment)),
            Procedure::DecrementSharedCounter => no_input(&params)
                .map(|_| RpcCall::ChangeSharedCounter(CounterAction::Decrement)),
            Procedure::ResetSharedCounter => {
                no_input(&params).map(|_| RpcCall::ChangeSharedCounter(CounterAction::Reset))
            }
        };

        call.map_err(JsonRpcError::from)
    }

    pub fn procedure(&self) -> Procedure {
        match self {
            RpcCall::Health => Procedure::Health,
            RpcCall::Hello => Procedure::Hello,
            RpcCall::Login(_) => Procedure::Login,
            RpcCall::RefreshToken(_) => Procedure::RefreshToken,
            RpcCall::Logout(_) => Procedure::Logout,
            RpcCall::GetProtectedData => Procedure::GetProtectedData,
            RpcCall::GetAllTokens => Procedure::GetAllTokens,
            RpcCall::GetTokenByUserId(_) => Procedure::GetTokenByUserId,
            RpcCall::GetSharedCounter => Procedure::GetSharedCounter,
            RpcCall::ChangeSharedCounter(CounterAction::Increment) => Procedure::IncrementSharedCounter,
            RpcCall::ChangeSharedCounter(CounterAction::Decrement) => Procedure::DecrementSharedCounter,
            RpcCall::ChangeSharedCounter(CounterAction::Reset) => Procedure::ResetSharedCounter,
        }
    }
}

fn input<T: DeserializeOwned>(params: Value) -> Result<T, RpcError> {
    serde_json::from_value(params).map_err(RpcError::invalid_input)
}

// 입력 없는 프로시저: params 생략(null) 또는 빈 객체만 허용
fn no_input(params: &Value) -> Result<(), RpcError> {
    match params {
        Value::Null => Ok(()),
        Value::Object(map) if map.is_empty() => Ok(()),
        _ => Err(RpcError::invalid_input("this procedure takes no input")),
    }
}
