use thiserror::Error;

/// BFF HTTP 클라이언트 에러
/// Errors raised while calling the HTTP surface through `BffClient`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// 서버가 응답했지만 에러 상태 코드
    /// Server answered with a non-2xx status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// 요청은 보냈지만 응답을 받지 못함 (연결 실패, 타임아웃)
    /// Request sent but no response received (connect failure, timeout)
    #[error("Network error: No response from server ({0})")]
    Network(String),

    /// 응답 JSON 파싱 실패
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// 요청 설정 중 에러 발생 (잘못된 URL 등)
    /// Request setup error (bad base URL, etc.)
    #[error("Request setup error: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            ClientError::Network(err.to_string())
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_builder() {
            ClientError::Setup(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
