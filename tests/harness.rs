// =====================================================
// 타이밍 하네스 통합 테스트 (순차 vs 병렬)
// =====================================================

mod common;

use bff_server::domains::perf::models::Strategy;
use bff_server::domains::perf::services::run_batch;
use bff_server::shared::clients::BffClient;
use bff_server::shared::errors::ClientError;
use common::*;

#[tokio::test]
async fn test_parallel_batch_returns_items_in_order() {
    let base_url = spawn_server().await;
    let client = BffClient::new(&base_url).unwrap();

    let report = run_batch(&client, 10, Strategy::Parallel).await.unwrap();

    assert_eq!(report.strategy, Strategy::Parallel);
    assert_eq!(report.count, 10);
    assert_eq!(report.items.len(), 10);
    let ids: Vec<u64> = report.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    assert_eq!(report.items[2].data, "Data for item 3");
}

#[tokio::test]
async fn test_sequential_batch_pays_every_delay() {
    let base_url = spawn_server().await;
    let client = BffClient::new(&base_url).unwrap();

    let report = run_batch(&client, 3, Strategy::Sequential).await.unwrap();

    assert_eq!(report.items.len(), 3);
    assert!(report.duration_ms >= 3 * TEST_DATA_DELAY.as_millis() as u64);
}

#[tokio::test]
async fn test_batch_fails_when_server_is_down() {
    let client = BffClient::new("http://127.0.0.1:1").unwrap();

    let result = run_batch(&client, 2, Strategy::Parallel).await;
    assert!(matches!(result, Err(ClientError::Network(_))));
}

#[tokio::test]
async fn test_client_maps_error_body() {
    let base_url = spawn_server().await;
    let client = BffClient::new(&base_url).unwrap();

    let err = client.get_token_by_user_id("ghost").await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Upstream {
            status: 404,
            message: "Token not found for user: ghost".to_string(),
        }
    );
}
