//! 인증 관련 설정
//!
//! 베어러 토큰 서명 비밀키와 만료 시간을 제공합니다.

use std::env;

/// 토큰 서명 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 서명 비밀키. 설정되지 않으면 경고 후 개발용 기본값을 사용합니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "devconnector-secret".to_string()
        })
    }

    /// 토큰 유효 시간(초). 기본값 3600.
    pub fn expiration_seconds() -> i64 {
        env::var("JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_default() {
        if env::var("JWT_EXPIRATION_SECONDS").is_err() {
            assert_eq!(JwtConfig::expiration_seconds(), 3600);
        }
    }

    #[test]
    fn test_secret_is_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
