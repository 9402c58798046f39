use std::collections::BTreeMap;

use crate::domains::auth::models::TokenRecord;
use crate::shared::database::TokenTable;

/// Token Repository
/// 토큰 테이블 작업 처리. 락은 메서드 하나가 끝날 때까지만 잡고 await 를 넘기지 않음.
/// Lock is held for a single map operation only, never across an await point.
pub struct TokenRepository {
    table: TokenTable,
}

impl TokenRepository {
    pub fn new(table: TokenTable) -> Self {
        Self { table }
    }

    /// 토큰 저장 (기존 레코드 덮어쓰기)
    /// Unconditional upsert; returns the record it replaced, if any
    pub fn put(&self, user_id: &str, record: TokenRecord) -> Option<TokenRecord> {
        self.table.write().insert(user_id.to_string(), record)
    }

    /// userId 로 조회
    pub fn get(&self, user_id: &str) -> Option<TokenRecord> {
        self.table.read().get(user_id).cloned()
    }

    /// 레코드 삭제. 없는 키를 지워도 에러 아님.
    /// Delete a record; returns whether one existed
    pub fn delete(&self, user_id: &str) -> bool {
        self.table.write().remove(user_id).is_some()
    }

    /// Access Token 만 교체 (refresh token 은 유지)
    /// Replace the access token in place; false when the record is absent
    pub fn update_access_token(&self, user_id: &str, access_token: String) -> bool {
        match self.table.write().get_mut(user_id) {
            Some(record) => {
                record.access_token = access_token;
                true
            }
            None => false,
        }
    }

    /// 전체 조회 (개발용, 페이지네이션 없음)
    /// Snapshot of every record, ordered by userId
    pub fn list_all(&self) -> BTreeMap<String, TokenRecord> {
        self.table
            .read()
            .iter()
            .map(|(user_id, record)| (user_id.clone(), record.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::Database;
    use chrono::Utc;

    fn record(user_id: &str, access: &str, refresh: &str) -> TokenRecord {
        TokenRecord {
            user_id: user_id.to_string(),
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_put_overwrites_existing_record() {
        let db = Database::new();
        let repo = TokenRepository::new(db.tokens().clone());

        assert!(repo.put("alice", record("alice", "a1", "r1")).is_none());
        let replaced = repo.put("alice", record("alice", "a2", "r2"));

        assert_eq!(replaced.map(|r| r.access_token), Some("a1".to_string()));
        let current = repo.get("alice").unwrap();
        assert_eq!(current.access_token, "a2");
        assert_eq!(current.refresh_token, "r2");
        assert_eq!(repo.list_all().len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let db = Database::new();
        let repo = TokenRepository::new(db.tokens().clone());
        repo.put("bob", record("bob", "a", "r"));

        assert!(repo.delete("bob"));
        assert!(!repo.delete("bob"));
        assert!(!repo.delete("nobody"));
        assert!(repo.get("bob").is_none());
    }

    #[test]
    fn test_update_access_token_keeps_refresh_token() {
        let db = Database::new();
        let repo = TokenRepository::new(db.tokens().clone());
        repo.put("carol", record("carol", "a1", "r1"));

        assert!(repo.update_access_token("carol", "a2".to_string()));
        assert!(!repo.update_access_token("dave", "a2".to_string()));

        let current = repo.get("carol").unwrap();
        assert_eq!(current.access_token, "a2");
        assert_eq!(current.refresh_token, "r1");
    }

    #[test]
    fn test_list_all_is_sorted_by_user_id() {
        let db = Database::new();
        let repo = TokenRepository::new(db.tokens().clone());
        for user in ["zed", "amy", "kim"] {
            repo.put(user, record(user, "a", "r"));
        }

        let keys: Vec<String> = repo.list_all().into_keys().collect();
        assert_eq!(keys, vec!["amy", "kim", "zed"]);
    }

    #[test]
    fn test_separate_databases_are_independent() {
        let first = Database::new();
        let second = Database::new();
        TokenRepository::new(first.tokens().clone()).put("alice", record("alice", "a", "r"));

        assert!(TokenRepository::new(second.tokens().clone()).get("alice").is_none());
        // clone 은 같은 테이블을 공유
        assert!(TokenRepository::new(first.clone().tokens().clone()).get("alice").is_some());
    }
}
