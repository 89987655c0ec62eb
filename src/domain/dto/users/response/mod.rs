//! # 계정 관련 응답 DTO
//!
//! 식별자는 24자리 16진 문자열, 시각은 RFC 3339 로 직렬화됩니다.

pub mod user_response;

pub use user_response::{CurrentUserResponse, LoginResponse, UserResponse};
