use std::fmt;

use serde_json::json;
use thiserror::Error;

use crate::domains::rpc::models::jsonrpc::{
    JsonRpcError, INTERNAL_ERROR, INVALID_PARAMS, NOT_FOUND, UNAUTHORIZED,
};
use crate::shared::errors::ClientError;

/// RPC 에러 코드 (HTTP 상태와 대응)
/// Procedure error codes, each tied to an HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    BadRequest,
    Unauthorized,
    NotFound,
    InternalServerError,
}

impl RpcErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RpcErrorCode::BadRequest => "BAD_REQUEST",
            RpcErrorCode::Unauthorized => "UNAUTHORIZED",
            RpcErrorCode::NotFound => "NOT_FOUND",
            RpcErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status(self) -> u16 {
        match self {
            RpcErrorCode::BadRequest => 400,
            RpcErrorCode::Unauthorized => 401,
            RpcErrorCode::NotFound => 404,
            RpcErrorCode::InternalServerError => 500,
        }
    }

    pub fn json_rpc_code(self) -> i32 {
        match self {
            RpcErrorCode::BadRequest => INVALID_PARAMS,
            RpcErrorCode::Unauthorized => UNAUTHORIZED,
            RpcErrorCode::NotFound => NOT_FOUND,
            RpcErrorCode::InternalServerError => INTERNAL_ERROR,
        }
    }

    /// 업스트림 HTTP 상태 -> 에러 코드
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => RpcErrorCode::BadRequest,
            401 | 403 => RpcErrorCode::Unauthorized,
            404 => RpcErrorCode::NotFound,
            _ => RpcErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 프로시저 실행 에러
/// Error returned by a procedure or one of its middlewares
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
    /// 업스트림 응답 상태 (없으면 code 기본값)
    pub http_status: u16,
}

impl RpcError {
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: code.http_status(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::Unauthorized, message)
    }

    pub fn invalid_input(detail: impl fmt::Display) -> Self {
        Self::new(RpcErrorCode::BadRequest, format!("Invalid input: {}", detail))
    }
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Upstream { status, message } => Self {
                code: RpcErrorCode::from_http_status(status),
                message,
                http_status: status,
            },
            other => Self::new(RpcErrorCode::InternalServerError, other.to_string()),
        }
    }
}

impl From<RpcError> for JsonRpcError {
    fn from(err: RpcError) -> Self {
        JsonRpcError::new(err.code.json_rpc_code(), err.message).with_data(json!({
            "code": err.code.as_str(),
            "httpStatus": err.http_status,
        }))
    }
}
