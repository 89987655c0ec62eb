//! 자격 증명 서비스
//!
//! - [`PasswordService`] - bcrypt 해시/검증
//! - [`TokenService`] - HS256 베어러 토큰 발급/검증

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;
