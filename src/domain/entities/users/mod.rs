//! Users Entity Module
//!
//! 계정 엔티티. 프로필과 게시물이 `user` 참조로 가리키는 대상입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     "Al".to_string(),
//!     "a@a.com".to_string(),
//!     password_hash,
//!     gravatar_url("a@a.com"),
//! );
//! ```

pub mod user;
