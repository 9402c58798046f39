use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::errors::AuthError;

/// JSON 본문 추출기 (역할: NestJS 의 ValidationPipe 같은 것)
/// JSON body extractor whose rejections use the `{ "error": message }` shape with 400,
/// instead of axum's plain-text 415/422 responses.
///
/// 사용법:
/// ```rust,ignore
/// pub async fn login(
///     State(app_state): State<AppState>,
///     ValidatedJson(request): ValidatedJson<LoginRequest>,
/// ) -> Result<...> { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AuthError::InvalidRequest(rejection_message(&rejection)).into()),
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "expected `Content-Type: application/json`".to_string()
        }
        other => other.body_text(),
    }
}
