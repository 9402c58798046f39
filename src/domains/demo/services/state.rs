// Demo domain state
// 데모 도메인 상태
use std::time::Duration;

use crate::domains::demo::services::SharedCounter;

/// Demo domain state
/// /api/data 지연 시간 + 프로세스 공유 카운터
#[derive(Clone)]
pub struct DemoState {
    pub data_delay: Duration,
    pub shared_counter: SharedCounter,
}

impl DemoState {
    pub fn new(data_delay: Duration) -> Self {
        Self {
            data_delay,
            shared_counter: SharedCounter::new(),
        }
    }
}
