use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde_json::Value;
use tracing::debug;

use crate::domains::rpc::models::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcCall, JSONRPC_VERSION,
};
use crate::domains::rpc::services::RpcContext;
use crate::shared::services::AppState;

/// JSON-RPC 엔드포인트
/// JSON-RPC endpoint. Protocol and procedure errors travel in the envelope, so the
/// HTTP status is always 200.
#[utoipa::path(
    post,
    path = "/api/rpc",
    request_body = JsonRpcRequest,
    responses(
        (status = 200, description = "JSON-RPC response (result or error)", body = JsonRpcResponse)
    ),
    security(
        (),
        ("BearerAuth" = [])
    ),
    tag = "RPC"
)]
pub async fn rpc(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<JsonRpcResponse> {
    // 1. JSON 파싱
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::parse_error(&e.to_string()),
            ))
        }
    };

    // 2. 요청 envelope 검증 (id 는 가능하면 되돌려줌)
    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: JsonRpcRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(&e.to_string()),
            ))
        }
    };

    if request.jsonrpc != JSONRPC_VERSION {
        return Json(JsonRpcResponse::error(
            request.id,
            JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }

    // 3. 프로시저 + 입력 해석
    let call = match RpcCall::parse(&request.method, request.params) {
        Ok(call) => call,
        Err(err) => return Json(JsonRpcResponse::error(request.id, err)),
    };

    // 4. 실행
    let ctx = RpcContext::from_headers(&headers);
    debug!(method = %request.method, request_id = %ctx.request_id, "rpc request");

    let response = match app_state.rpc_state.rpc_service.call(&ctx, call).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(err) => JsonRpcResponse::error(request.id, err.into()),
    };

    Json(response)
}
