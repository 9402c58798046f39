// src/domains/auth/services/jwt_service.rs
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domains::auth::models::auth::{ACCESS_TOKEN_EXPIRES_IN, REFRESH_TOKEN_EXPIRES_IN};
use crate::domains::auth::models::jwt::Claims;
use crate::shared::config::AuthConfig;
use crate::shared::errors::AuthError;

/// 서명 키 한 쌍 (인코딩/디코딩)
#[derive(Clone)]
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT 서비스
/// JWT Service: access and refresh tokens are signed with two distinct secrets,
/// so one kind never verifies as the other.
#[derive(Clone)]
pub struct JwtService {
    access_keys: KeyPair,
    refresh_keys: KeyPair,
    validation: Validation,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료 시각을 정확히 지키도록 leeway 없음
        validation.leeway = 0;

        Self {
            access_keys: KeyPair::from_secret(&config.access_token_secret),
            refresh_keys: KeyPair::from_secret(&config.refresh_token_secret),
            validation,
        }
    }

    /// Access Token 발급 (15분)
    /// Generate Access Token (15 minutes)
    pub fn generate_access_token(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, Duration::seconds(ACCESS_TOKEN_EXPIRES_IN));
        self.sign(&claims, &self.access_keys)
            .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
    }

    /// Refresh Token 발급 (7일)
    /// Generate Refresh Token (7 days)
    pub fn generate_refresh_token(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, Duration::seconds(REFRESH_TOKEN_EXPIRES_IN));
        self.sign(&claims, &self.refresh_keys)
            .map_err(|e| AuthError::Internal(format!("Failed to generate refresh token: {}", e)))
    }

    /// Access Token 검증
    /// Verify Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify(token, &self.access_keys)
    }

    /// Refresh Token 검증 (서명 + 만료)
    /// Verify Refresh Token (signature + expiry)
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify(token, &self.refresh_keys)
    }

    fn sign(&self, claims: &Claims, keys: &KeyPair) -> jsonwebtoken::errors::Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &keys.encoding)
    }

    fn verify(&self, token: &str, keys: &KeyPair) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &keys.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    debug!("rejected expired token");
                }
                other => {
                    debug!(reason = ?other, "rejected token");
                }
            }
            AuthError::InvalidToken
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> JwtService {
        JwtService::new(&AuthConfig::default())
    }

    #[test]
    fn test_access_token_round_trips_user_id() {
        let jwt = service();
        let token = jwt.generate_access_token("alice").unwrap();
        let claims = jwt.verify_access_token(&token).unwrap();

        assert_eq!(claims.user_id, "alice");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRES_IN);
    }

    #[test]
    fn test_refresh_token_lifetime_is_seven_days() {
        let jwt = service();
        let token = jwt.generate_refresh_token("alice").unwrap();
        let claims = jwt.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let jwt = service();
        let access = jwt.generate_access_token("alice").unwrap();
        let refresh = jwt.generate_refresh_token("alice").unwrap();

        assert_eq!(jwt.verify_refresh_token(&access), Err(AuthError::InvalidToken));
        assert_eq!(jwt.verify_access_token(&refresh), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_tokens_minted_back_to_back_differ() {
        let jwt = service();
        let first = jwt.generate_access_token("alice").unwrap();
        let second = jwt.generate_access_token("alice").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id: "alice".to_string(),
            iat: now - 2 * ACCESS_TOKEN_EXPIRES_IN,
            exp: now - ACCESS_TOKEN_EXPIRES_IN,
            jti: "expired".to_string(),
        };
        let token = jwt.sign(&claims, &jwt.access_keys).unwrap();

        assert_eq!(jwt.verify_access_token(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert_eq!(
            service().verify_access_token("not.a.jwt"),
            Err(AuthError::InvalidToken)
        );
    }
}
