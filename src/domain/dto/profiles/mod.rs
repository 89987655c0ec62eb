//! # Profile Data Transfer Objects Module
//!
//! 프로필 upsert, 경력/학력 추가 요청과 프로필 응답을 정의합니다.
//! 조회 응답은 소유자를 `{_id, name, avatar}` 로 채워 넣고,
//! 변경 응답은 소유자 식별자 문자열만 담습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
