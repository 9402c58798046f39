// 순차 vs 병렬 호출 시간 측정
// Timing harness: fetches /api/data?id=1..=count sequentially or all at once
use std::time::Instant;

use futures_util::future::join_all;
use tracing::info;

use crate::domains::demo::models::DataResponse;
use crate::domains::perf::models::{BatchReport, Strategy};
use crate::shared::clients::BffClient;
use crate::shared::errors::ClientError;

/// 배치당 기본 요청 수
pub const DEFAULT_REQUEST_COUNT: u64 = 30;

/// 배치 실행. 하나라도 실패하면 배치 전체 실패.
/// Run one batch; any failed fetch fails the whole batch.
pub async fn run_batch(
    client: &BffClient,
    count: u64,
    strategy: Strategy,
) -> Result<BatchReport, ClientError> {
    let start = Instant::now();

    let mut items = match strategy {
        Strategy::Sequential => {
            let mut items = Vec::with_capacity(count as usize);
            for id in 1..=count {
                items.push(client.fetch_data(id).await?);
            }
            items
        }
        Strategy::Parallel => join_all((1..=count).map(|id| client.fetch_data(id)))
            .await
            .into_iter()
            .collect::<Result<Vec<DataResponse>, ClientError>>()?,
    };
    items.sort_by_key(|item| item.id);

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(%strategy, count, duration_ms, "batch finished");

    Ok(BatchReport {
        strategy,
        count,
        duration_ms,
        items,
    })
}
