// 애플리케이션 조립: OpenAPI 문서, CORS, 트레이싱, 서버 실행
// Application assembly: OpenAPI document, CORS, tracing layer and the server loop
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::routes::create_router;
use crate::shared::config::AppConfig;
use crate::shared::database::Database;
use crate::shared::services::AppState;

// Import models for OpenAPI schema
use crate::domains::auth::models::*;
use crate::domains::demo::models::*;
use crate::domains::rpc::models::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::demo::handlers::demo_handler::health,
        crate::domains::demo::handlers::demo_handler::hello,
        crate::domains::demo::handlers::demo_handler::get_data,
        crate::domains::demo::handlers::demo_handler::get_ip,
        crate::domains::demo::handlers::demo_handler::get_shared_counter,
        crate::domains::demo::handlers::demo_handler::increment_shared_counter,
        crate::domains::demo::handlers::demo_handler::decrement_shared_counter,
        crate::domains::demo::handlers::demo_handler::reset_shared_counter,
        crate::domains::auth::handlers::auth_handler::login,
        crate::domains::auth::handlers::auth_handler::refresh,
        crate::domains::auth::handlers::auth_handler::logout,
        crate::domains::auth::handlers::auth_handler::list_tokens,
        crate::domains::auth::handlers::auth_handler::get_token,
        crate::domains::auth::handlers::auth_handler::get_protected,
        crate::domains::rpc::handlers::rpc_handler::rpc
    ),
    components(schemas(
        HealthResponse,
        FrameworkInfo,
        HelloResponse,
        DataResponse,
        IpResponse,
        CounterSnapshot,
        SuccessResponse,
        LoginRequest,
        LoginResponse,
        RefreshTokenRequest,
        RefreshTokenResponse,
        LogoutRequest,
        MessageResponse,
        ProtectedResponse,
        TokenRecord,
        TokensResponse,
        JsonRpcRequest,
        JsonRpcResponse,
        JsonRpcError
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Example", description = "Example endpoints (hello, delayed data, client ip, shared counter)"),
        (name = "Auth", description = "Authentication API endpoints (JWT access/refresh tokens)"),
        (name = "RPC", description = "JSON-RPC facade over the HTTP endpoints")
    ),
    info(
        title = "BFF Server",
        description = "Backend-for-frontend with JWT auth, an in-memory token store and a JSON-RPC facade",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// 라우터 + 미들웨어 레이어 조립
/// Build the full application router for the given state
pub fn build_app(app_state: AppState, config: &AppConfig) -> Result<Router> {
    // CORS 설정
    let cors = cors_layer(&config.cors_origin)?;

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    Ok(app)
}

/// CORS 레이어 생성
/// `*` allows any origin without credentials; tower-http rejects a wildcard origin
/// combined with `allow_credentials(true)`.
pub fn cors_layer(cors_origin: &str) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if cors_origin.trim() == "*" {
        return Ok(cors.allow_origin(AllowOrigin::any()));
    }

    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("CORS_ORIGIN is not a valid header value: {cors_origin:?}"))?;

    Ok(cors.allow_origin(origin).allow_credentials(true))
}

/// 서버 실행 (종료 시그널까지)
/// Bind the configured port and serve until ctrl-c
pub async fn serve(config: AppConfig) -> Result<()> {
    // 인메모리 토큰 저장소 + AppState 생성 (모든 Service 초기화)
    let db = Database::new();
    let app_state = AppState::new(db, &config).context("Failed to initialize AppState")?;
    let app = build_app(app_state, &config)?;

    // 서버 시작
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(port = config.port, "Server running on http://localhost:{}", config.port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", config.port);
    info!(upstream = %config.bff_api_url, "RPC facade forwarding target");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app_with_origin(cors_origin: &str) -> Result<Router> {
        let config = AppConfig {
            cors_origin: cors_origin.to_string(),
            ..AppConfig::default()
        };
        let state = AppState::new(Database::new(), &config)?;
        build_app(state, &config)
    }

    async fn preflight(app: Router, origin: &str) -> axum::http::Response<Body> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/hello")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_wildcard_origin_allows_any_without_credentials() {
        let app = app_with_origin("*").unwrap();
        let response = preflight(app, "http://anywhere.example").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn test_configured_origin_allows_credentials() {
        let app = app_with_origin("http://localhost:3000").unwrap();
        let response = preflight(app, "http://localhost:3000").await;

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[test]
    fn test_invalid_origin_is_an_error() {
        assert!(cors_layer("http://bad\norigin").is_err());
    }
}
