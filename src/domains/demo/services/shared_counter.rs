use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domains::demo::models::CounterSnapshot;

// 공유 카운터
// 역할: 모든 요청이 같은 인스턴스를 보는 서버 측 상태 (요청 간 상태 누수를 보여주는 데모)
// SharedCounter: one process-wide counter; clones share it, so a mutation by one
// caller is visible to every other caller
#[derive(Clone)]
pub struct SharedCounter {
    state: Arc<RwLock<CounterSnapshot>>,
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCounter {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CounterSnapshot {
                server_count: 0,
                request_id: new_request_id(),
                timestamp: now(),
            })),
        }
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.state.read().clone()
    }

    pub fn increment(&self) -> CounterSnapshot {
        self.apply(|count| count + 1)
    }

    pub fn decrement(&self) -> CounterSnapshot {
        self.apply(|count| count - 1)
    }

    /// 0 으로 초기화 (requestId 도 새로 발급)
    pub fn reset(&self) -> CounterSnapshot {
        self.apply(|_| 0)
    }

    fn apply(&self, update: impl FnOnce(i64) -> i64) -> CounterSnapshot {
        let mut state = self.state.write();
        state.server_count = update(state.server_count);
        state.request_id = new_request_id();
        state.timestamp = now();
        debug!(server_count = state.server_count, request_id = %state.request_id, "shared counter changed");
        state.clone()
    }
}

// "req-<unix millis>-<9자리 랜덤>"
fn new_request_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("req-{}-{}", Utc::now().timestamp_millis(), &suffix[..9])
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
