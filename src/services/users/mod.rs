//! 계정 서비스
//!
//! 회원가입, 로그인, 베어러 토큰으로부터의 사용자 식별을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (호출마다 새 솔트)
//! - 이메일 중복 방지
//! - 토큰 검증 실패 사유는 외부로 노출하지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = user_service.register(request).await?;
//! let login = user_service.login(credentials).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
