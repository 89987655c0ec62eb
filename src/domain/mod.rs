//! 도메인 계층: 저장 엔티티, HTTP DTO, 인증 모델

pub mod dto;
pub mod entities;
pub mod models;
