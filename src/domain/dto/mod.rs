//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계약. 요청 DTO 는 느슨한 `Option` 필드로 받고, 응답 DTO 는
//! 저장 엔티티를 문자열 식별자와 RFC 3339 시각으로 풀어 씁니다.

pub mod posts;
pub mod profiles;
pub mod users;

use chrono::{DateTime, Utc};

/// BSON 시각을 chrono UTC 시각으로 바꿉니다.
pub fn to_chrono(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
