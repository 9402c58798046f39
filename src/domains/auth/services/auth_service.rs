use chrono::Utc;
use tracing::{debug, info};

use crate::domains::auth::models::{
    require_field, LoginResponse, MessageResponse, ProtectedResponse, RefreshTokenResponse,
    TokenRecord, TokensResponse, ACCESS_TOKEN_EXPIRES_IN,
};
use crate::domains::auth::services::JwtService;
use crate::shared::database::{Database, TokenRepository};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::parse_bearer;

// 인증 서비스
// 역할: 토큰 발급 / 갱신 / 폐기 및 보호 리소스 접근 검증
// AuthService: issues, rotates and revokes tokens against the token store
//
// userId 별 상태: NoSession -(login)-> Active -(refresh)*-> Active -(logout)-> NoSession
// 같은 userId 에 대한 동시 요청은 마지막 쓰기가 이김 (순서 보장 없음)
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
}

impl AuthService {
    // 생성자 (Database 와 JWT Service 주입)
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    fn token_repo(&self) -> TokenRepository {
        TokenRepository::new(self.db.tokens().clone())
    }

    /// 로그인: access/refresh 토큰 발급 후 저장 (기존 세션 덮어쓰기)
    /// Login: mint a token pair and store it, replacing any previous session
    pub fn login(&self, user_id: &str) -> Result<LoginResponse, AuthError> {
        let user_id = require_field(Some(user_id), "userId")?;

        // 1. 토큰 발급
        let access_token = self.jwt_service.generate_access_token(user_id)?;
        let refresh_token = self.jwt_service.generate_refresh_token(user_id)?;

        // 2. 저장 (덮어쓰기)
        let replaced = self.token_repo().put(
            user_id,
            TokenRecord {
                user_id: user_id.to_string(),
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                created_at: Utc::now(),
            },
        );
        info!(user_id, replaced_session = replaced.is_some(), "issued token pair");

        Ok(LoginResponse {
            access_token,
            refresh_token,
            expires_in: ACCESS_TOKEN_EXPIRES_IN,
        })
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// Verify refresh token and issue new access token (refresh token is not rotated)
    pub fn refresh(&self, refresh_token: &str) -> Result<RefreshTokenResponse, AuthError> {
        let refresh_token = require_field(Some(refresh_token), "refreshToken")?;

        // 1. 서명 + 만료 검증
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;

        // 2. 저장된 세션과 비교 (로그아웃/재로그인으로 교체된 토큰 거부)
        let repo = self.token_repo();
        let stored = repo.get(&claims.user_id).ok_or_else(|| {
            debug!(user_id = %claims.user_id, "refresh without active session");
            AuthError::RevokedRefreshToken
        })?;

        if stored.refresh_token != refresh_token {
            debug!(user_id = %claims.user_id, "refresh token does not match stored session");
            return Err(AuthError::RevokedRefreshToken);
        }

        // 3. 새 Access Token 발급 후 제자리 갱신
        let access_token = self.jwt_service.generate_access_token(&claims.user_id)?;
        if !repo.update_access_token(&claims.user_id, access_token.clone()) {
            // 검증과 갱신 사이에 로그아웃된 경우
            return Err(AuthError::RevokedRefreshToken);
        }
        info!(user_id = %claims.user_id, "refreshed access token");

        Ok(RefreshTokenResponse {
            access_token,
            expires_in: ACCESS_TOKEN_EXPIRES_IN,
        })
    }

    /// 로그아웃: 레코드 삭제 (없어도 성공)
    /// Logout: delete the record unconditionally (idempotent)
    ///
    /// 이미 발급된 access token 은 만료 전까지 /api/protected 에서 계속 유효함.
    pub fn logout(&self, user_id: &str) -> Result<MessageResponse, AuthError> {
        let user_id = require_field(Some(user_id), "userId")?;

        let existed = self.token_repo().delete(user_id);
        info!(user_id, existed, "logged out");

        Ok(MessageResponse::new("Logged out successfully"))
    }

    /// 보호된 리소스 접근 (Authorization 헤더 값 검증)
    /// Validates an `Authorization` header value. The token store is not consulted.
    pub fn get_protected_resource(
        &self,
        authorization: Option<&str>,
    ) -> Result<ProtectedResponse, AuthError> {
        let header = authorization.ok_or(AuthError::MissingToken)?;
        let token = parse_bearer(header).ok_or(AuthError::InvalidAuthorizationFormat)?;
        let claims = self.jwt_service.verify_access_token(token)?;

        Ok(ProtectedResponse {
            message: "Protected data accessed successfully".to_string(),
            user_id: claims.user_id,
        })
    }

    /// 전체 토큰 조회 (개발용)
    pub fn list_tokens(&self) -> TokensResponse {
        self.token_repo().list_all().into()
    }

    /// 특정 userId 토큰 조회
    /// Get token record by user id
    pub fn get_token_by_user_id(&self, user_id: &str) -> Result<TokenRecord, AuthError> {
        self.token_repo()
            .get(user_id)
            .ok_or_else(|| AuthError::TokenNotFound {
                user_id: user_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AuthConfig;

    fn service() -> AuthService {
        AuthService::new(Database::new(), JwtService::new(&AuthConfig::default()))
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    #[test]
    fn test_login_then_lookup_matches_response() {
        let auth = service();
        let login = auth.login("u1").unwrap();
        let record = auth.get_token_by_user_id("u1").unwrap();

        assert_eq!(login.expires_in, 900);
        assert_eq!(record.access_token, login.access_token);
        assert_eq!(record.refresh_token, login.refresh_token);
    }

    #[test]
    fn test_login_requires_user_id() {
        assert_eq!(
            service().login(""),
            Err(AuthError::MissingField { field: "userId" })
        );
    }

    #[test]
    fn test_second_login_replaces_first() {
        let auth = service();
        let first = auth.login("alice").unwrap();
        let second = auth.login("alice").unwrap();

        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.refresh_token, second.refresh_token);

        let record = auth.get_token_by_user_id("alice").unwrap();
        assert_eq!(record.access_token, second.access_token);
        assert_eq!(record.refresh_token, second.refresh_token);

        // 교체된 refresh token 은 더 이상 사용 불가
        assert_eq!(
            auth.refresh(&first.refresh_token),
            Err(AuthError::RevokedRefreshToken)
        );
    }

    #[test]
    fn test_full_session_lifecycle() {
        let auth = service();

        let login = auth.login("u1").unwrap();
        let refreshed = auth.refresh(&login.refresh_token).unwrap();
        assert_ne!(refreshed.access_token, login.access_token);
        assert_eq!(refreshed.expires_in, 900);

        let record = auth.get_token_by_user_id("u1").unwrap();
        assert_eq!(record.access_token, refreshed.access_token);
        assert_eq!(record.refresh_token, login.refresh_token);

        assert_eq!(
            auth.logout("u1").unwrap().message,
            "Logged out successfully"
        );
        assert_eq!(
            auth.get_token_by_user_id("u1"),
            Err(AuthError::TokenNotFound { user_id: "u1".into() })
        );
        assert_eq!(
            auth.refresh(&login.refresh_token),
            Err(AuthError::RevokedRefreshToken)
        );
    }

    #[test]
    fn test_refresh_rejects_access_token() {
        let auth = service();
        let login = auth.login("u1").unwrap();

        assert_eq!(auth.refresh(&login.access_token), Err(AuthError::InvalidToken));
        assert_eq!(
            auth.refresh(""),
            Err(AuthError::MissingField { field: "refreshToken" })
        );
    }

    #[test]
    fn test_logout_unknown_user_succeeds() {
        assert!(service().logout("nonexistent-user").is_ok());
    }

    #[test]
    fn test_protected_resource_header_handling() {
        let auth = service();
        let login = auth.login("u1").unwrap();

        let ok = auth
            .get_protected_resource(Some(&bearer(&login.access_token)))
            .unwrap();
        assert_eq!(ok.user_id, "u1");

        assert_eq!(auth.get_protected_resource(None), Err(AuthError::MissingToken));
        assert_eq!(
            auth.get_protected_resource(Some(&login.access_token)),
            Err(AuthError::InvalidAuthorizationFormat)
        );
        assert_eq!(
            auth.get_protected_resource(Some(&bearer(&login.refresh_token))),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_access_token_survives_logout() {
        let auth = service();
        let login = auth.login("u1").unwrap();
        auth.logout("u1").unwrap();

        // 스토어를 확인하지 않으므로 만료 전까지는 통과
        let resource = auth
            .get_protected_resource(Some(&bearer(&login.access_token)))
            .unwrap();
        assert_eq!(resource.user_id, "u1");
    }

    #[test]
    fn test_list_tokens_counts_sessions() {
        let auth = service();
        auth.login("a").unwrap();
        auth.login("b").unwrap();
        auth.login("a").unwrap();

        let listed = auth.list_tokens();
        assert_eq!(listed.count, 2);
        assert!(listed.tokens.contains_key("a"));
        assert!(listed.tokens.contains_key("b"));
    }
}
