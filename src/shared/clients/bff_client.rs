use std::time::Duration;

use reqwest::{header, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::domains::auth::models::{
    LoginResponse, MessageResponse, ProtectedResponse, RefreshTokenResponse, TokenRecord,
    TokensResponse,
};
use crate::domains::demo::models::{
    CounterSnapshot, DataResponse, HealthResponse, HelloResponse, SuccessResponse,
};
use crate::shared::errors::ClientError;

/// 모든 요청에 적용되는 고정 타임아웃
/// Fixed client-side timeout applied to every call
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

// BFF HTTP API 클라이언트
// 역할: 프론트 서버에서 axios 인스턴스로 백엔드를 호출하던 것과 같은 것
// HTTP client for the BFF endpoints. No retries.
#[derive(Clone)]
pub struct BffClient {
    http_client: reqwest::Client,
    base_url: Url,
}

/// 공유 카운터 변경 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CounterAction::Increment => "increment",
            CounterAction::Decrement => "decrement",
            CounterAction::Reset => "reset",
        }
    }
}

/// 에러 응답 본문 `{ "error": "..." }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl BffClient {
    // 클라이언트 생성
    // Create new client for the given base URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Setup(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Setup(format!("{base_url} cannot be a base URL")));
        }

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ClientError::Setup(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get(&["health"]).await
    }

    /// GET /api/hello
    pub async fn hello(&self) -> Result<HelloResponse, ClientError> {
        self.get(&["api", "hello"]).await
    }

    /// POST /api/auth/login
    /// 로그인 및 토큰 발급
    pub async fn login(&self, user_id: &str) -> Result<LoginResponse, ClientError> {
        self.post(&["api", "auth", "login"], &json!({ "userId": user_id }))
            .await
    }

    /// POST /api/auth/refresh
    /// 토큰 갱신
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<RefreshTokenResponse, ClientError> {
        self.post(
            &["api", "auth", "refresh"],
            &json!({ "refreshToken": refresh_token }),
        )
        .await
    }

    /// POST /api/auth/logout
    pub async fn logout(&self, user_id: &str) -> Result<MessageResponse, ClientError> {
        self.post(&["api", "auth", "logout"], &json!({ "userId": user_id }))
            .await
    }

    /// GET /api/protected
    /// 보호된 리소스 접근 (Access Token 필요)
    pub async fn get_protected_data(&self, access_token: &str) -> Result<ProtectedResponse, ClientError> {
        let url = self.endpoint(&["api", "protected"])?;
        let request = self.http_client.get(url).bearer_auth(access_token);
        self.send(request).await
    }

    /// GET /api/auth/tokens
    /// 모든 토큰 조회 (개발용)
    pub async fn get_all_tokens(&self) -> Result<TokensResponse, ClientError> {
        self.get(&["api", "auth", "tokens"]).await
    }

    /// GET /api/auth/tokens/:userId
    /// userId 는 path segment 로 인코딩됨
    pub async fn get_token_by_user_id(&self, user_id: &str) -> Result<TokenRecord, ClientError> {
        self.get(&["api", "auth", "tokens", user_id]).await
    }

    /// GET /api/shared-counter
    pub async fn get_shared_counter(&self) -> Result<CounterSnapshot, ClientError> {
        self.get(&["api", "shared-counter"]).await
    }

    /// POST /api/shared-counter/{increment|decrement|reset}
    /// 공유 카운터 변경
    pub async fn change_shared_counter(&self, action: CounterAction) -> Result<SuccessResponse, ClientError> {
        self.post(&["api", "shared-counter", action.as_str()], &json!({}))
            .await
    }

    /// GET /api/data?id=
    pub async fn fetch_data(&self, id: u64) -> Result<DataResponse, ClientError> {
        let mut url = self.endpoint(&["api", "data"])?;
        url.query_pairs_mut().append_pair("id", &id.to_string());
        self.send(self.http_client.get(url)).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Setup(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        self.send(self.http_client.get(url)).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        self.send(self.http_client.post(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        debug!(status = %response.status(), url = %response.url(), "bff response");

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// 에러 메시지 우선순위: 본문 `error` 필드 -> 상태 코드 사유 -> "Request failed"
    /// Error message precedence: body `error` field, then status reason, then "Request failed"
    async fn upstream_error(response: Response) -> ClientError {
        let status = response.status();
        let body_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);

        let message = body_message
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Request failed".to_string());

        ClientError::Upstream {
            status: status.as_u16(),
            message,
        }
    }
}
