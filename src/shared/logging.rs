//! tracing 초기화 (stdout, `RUST_LOG` 로 필터 조정)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// stdout 기본 필터
const DEFAULT_FILTER: &str = "info,tower_http=info";

/// 전역 subscriber 설치. 프로세스당 한 번만 호출.
/// Installs the global subscriber; call once per process.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
