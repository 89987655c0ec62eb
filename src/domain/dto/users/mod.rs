//! # User Data Transfer Objects Module
//!
//! 계정 API 의 요청/응답 계약입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── register_request.rs   # 회원가입
//! │   └── login_request.rs      # 로그인
//! └── response/
//!     └── user_response.rs      # 가입 결과, 로그인 토큰, 현재 사용자
//! ```
//!
//! ## JSON 예제
//!
//! ### 회원가입 응답
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "name": "Al",
//!   "email": "a@a.com",
//!   "avatar": "//www.gravatar.com/avatar/...?s=200&r=pg&d=mm",
//!   "password": "$2b$10$...",
//!   "date": "2024-01-01T00:00:00Z"
//! }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! { "success": true, "token": "Bearer eyJhbGciOiJIUzI1NiIs..." }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
