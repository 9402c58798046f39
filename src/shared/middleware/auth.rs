use axum::http::{header::AUTHORIZATION, HeaderMap};

/// "Bearer <token>" 형식에서 토큰 부분만 추출
/// Extract the token from a `Bearer <token>` header value
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

/// Authorization 헤더 원문 (ASCII 가 아니면 없는 것으로 취급)
/// Raw Authorization header value; non-ASCII values are treated as absent
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
}

/// 요청 헤더에서 Bearer 토큰 추출 (없으면 None)
/// Bearer token carried by the request, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    authorization_header(headers)
        .and_then(parse_bearer)
        .map(str::to_string)
}
