//! 솔트를 포함한 단방향 비밀번호 해시
//!
//! bcrypt 를 사용하며 호출마다 새 솔트가 생성됩니다. 해시 실패는 요청을
//! 중단시키지 않고 `InternalError` 로 보고됩니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` / 실행 환경에 따른 강도로 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash_password(&self, plain: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 저장된 해시가 손상된 경우도 불일치로 취급합니다.
    pub fn verify_password(&self, plain: &str, hashed: &str) -> bool {
        match bcrypt::verify(plain, hashed) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("비밀번호 검증 실패: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = PasswordService::new(4);
        let hashed = service.hash_password("secret1").unwrap();

        assert_ne!(hashed, "secret1");
        assert!(service.verify_password("secret1", &hashed));
        assert!(!service.verify_password("secret2", &hashed));
    }

    #[test]
    fn test_unique_salt_per_call() {
        let service = PasswordService::new(4);
        let first = service.hash_password("secret1").unwrap();
        let second = service.hash_password("secret1").unwrap();

        assert_ne!(first, second);
        assert!(service.verify_password("secret1", &first));
        assert!(service.verify_password("secret1", &second));
    }

    #[test]
    fn test_corrupt_hash_does_not_verify() {
        let service = PasswordService::new(4);
        assert!(!service.verify_password("secret1", "not-a-bcrypt-hash"));
    }
}
