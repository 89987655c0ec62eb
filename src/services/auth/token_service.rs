//! 베어러 토큰 발급/검증 (HS256)
//!
//! 검증 실패 사유(형식 오류, 만료, 서명 불일치, 알고리즘 불일치)는 모두
//! 하나의 `AuthenticationError` 로 합쳐집니다. 사유는 로그로만 남습니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_seconds())
    }

    /// `{id, name, avatar}` 와 만료 시각을 담은 토큰을 발급합니다.
    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            id: user.id_string(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        self.sign(&claims)
    }

    fn sign(&self, claims: &TokenClaims) -> AppResult<String> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("토큰 검증 실패: {:?}", e.kind())))
    }

    /// `Authorization` 헤더 값에서 토큰 부분만 잘라냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("Al".into(), "a@a.com".into(), "hash".into(), "//www.gravatar.com/avatar/x".into())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new("secret", 3600);
        let user = user();

        let token = service.issue_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.id, user.id_string());
        assert_eq!(claims.name, "Al");
        assert_eq!(claims.avatar, user.avatar);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!((claims.iat - Utc::now().timestamp()).abs() <= 5);
    }

    #[test]
    fn test_wrong_secret_is_unauthenticated() {
        let token = TokenService::new("secret", 3600).issue_token(&user()).unwrap();

        let result = TokenService::new("other", 3600).verify_token(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_unauthenticated() {
        let service = TokenService::new("secret", 3600);
        let now = Utc::now().timestamp();
        let stale = TokenClaims {
            id: user().id_string(),
            name: "Al".into(),
            avatar: "".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = service.sign(&stale).unwrap();

        assert!(matches!(service.verify_token(&token), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_malformed_token_is_unauthenticated() {
        let service = TokenService::new("secret", 3600);
        assert!(matches!(service.verify_token("garbage"), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("secret", 3600);

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("abc.def").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("Basic abc").is_err());
    }
}
