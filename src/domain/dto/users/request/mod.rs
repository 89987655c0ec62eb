//! # 계정 관련 요청 DTO
//!
//! 모든 필드는 `Option<String>` 입니다. 누락된 필드도 역직렬화는 성공하고,
//! 필수 여부와 형식은 [`crate::validation`] 이 필드별 메시지로 판정합니다.

pub mod login_request;
pub mod register_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
