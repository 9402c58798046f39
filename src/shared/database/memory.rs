use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domains::auth::models::TokenRecord;

/// userId -> TokenRecord 테이블
/// Token table keyed by userId
pub type TokenTable = Arc<RwLock<HashMap<String, TokenRecord>>>;

// 인메모리 데이터베이스
// 역할: 프로세스 내 공유 테이블 묶음. clone 하면 같은 테이블을 공유하고,
//       new() 로 만든 인스턴스끼리는 서로 독립적
// In-memory database. Clones share tables; separately constructed instances are independent.
#[derive(Clone, Default)]
pub struct Database {
    tokens: TokenTable,
}

impl Database {
    // 빈 데이터베이스 생성
    // Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    // 토큰 테이블 핸들 반환
    // Get token table handle
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }
}
