use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domains::demo::models::DataResponse;

/// 요청 실행 방식
/// How a batch issues its requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 하나씩 await
    Sequential,
    /// 전부 동시에 (join_all)
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => f.write_str("sequential"),
            Strategy::Parallel => f.write_str("parallel"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel" | "par" => Ok(Strategy::Parallel),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// 배치 실행 결과
/// Outcome of one batch; `items` are ordered by id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub strategy: Strategy,
    pub count: u64,
    pub duration_ms: u64,
    pub items: Vec<DataResponse>,
}
