//! 이메일 기반 아바타 URL
//!
//! Gravatar 형식의 프로토콜 상대 URL 을 만듭니다. 해시는 앞뒤 공백을
//! 제거하고 소문자로 바꾼 이메일의 SHA-256 16진 문자열입니다.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "//www.gravatar.com/avatar/";

/// 크기 200, 등급 pg, 기본 이미지 mm
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let hash: String = digest.iter().map(|byte| format!("{:02x}", byte)).collect();

    format!("{}{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hash)
}
