//! # Domain Models Module
//!
//! 저장되지 않는 인증 모델: 토큰 클레임과 요청에 부착되는 인증 사용자.

pub mod auth;
pub mod token;
