use serde::{Deserialize, Serialize};

/// 베어러 토큰 페이로드
///
/// `id` 는 사용자 식별자(16진 문자열), `iat`/`exp` 는 Unix 초.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub iat: i64,
    pub exp: i64,
}
