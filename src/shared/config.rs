// 애플리케이션 설정
// 역할: 환경 변수를 한 번 읽어서 각 서비스 생성자에 주입
// Application configuration, read once from the environment and passed into services
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DATA_DELAY_MS: u64 = 500;

const DEV_ACCESS_TOKEN_SECRET: &str = "dev-access-token-secret-change-in-production";
const DEV_REFRESH_TOKEN_SECRET: &str = "dev-refresh-token-secret-change-in-production";

/// JWT 서명 키 설정
/// JWT signing secrets (access and refresh must differ)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
}

impl AuthConfig {
    pub fn new(
        access_token_secret: impl Into<String>,
        refresh_token_secret: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            access_token_secret: access_token_secret.into(),
            refresh_token_secret: refresh_token_secret.into(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.access_token_secret.is_empty() || self.refresh_token_secret.is_empty() {
            bail!("token secrets must not be empty");
        }
        if self.access_token_secret == self.refresh_token_secret {
            bail!("ACCESS_TOKEN_SECRET and REFRESH_TOKEN_SECRET must differ");
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: DEV_ACCESS_TOKEN_SECRET.to_string(),
            refresh_token_secret: DEV_REFRESH_TOKEN_SECRET.to_string(),
        }
    }
}

/// 서버 전체 설정
/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 리스닝 포트
    pub port: u16,
    /// CORS 허용 origin (프론트엔드 주소)
    pub cors_origin: String,
    /// /api/data 인위적 지연
    /// Artificial delay applied by GET /api/data
    pub data_delay: Duration,
    /// RPC 레이어가 호출할 HTTP 엔드포인트 base URL
    /// Base URL the RPC facade forwards to
    pub bff_api_url: String,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            data_delay: Duration::from_millis(DEFAULT_DATA_DELAY_MS),
            bff_api_url: format!("http://localhost:{}", DEFAULT_PORT),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드 (없으면 기본값)
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 생성 (테스트에서 환경 변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => defaults.port,
        };

        let data_delay = match read("DATA_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .with_context(|| format!("DATA_DELAY_MS must be an integer, got {raw:?}"))?,
            ),
            None => defaults.data_delay,
        };

        let auth = AuthConfig::new(
            read("ACCESS_TOKEN_SECRET").unwrap_or(defaults.auth.access_token_secret),
            read("REFRESH_TOKEN_SECRET").unwrap_or(defaults.auth.refresh_token_secret),
        )?;

        Ok(Self {
            port,
            cors_origin: read("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            data_delay,
            bff_api_url: read("BFF_API_URL").unwrap_or_else(|| format!("http://localhost:{port}")),
            auth,
        })
    }
}
