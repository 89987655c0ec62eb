//! # HTTP Request Handlers
//!
//! 요청 본문 검증 후 서비스를 호출하고 JSON 으로 응답하는 얇은 계층입니다.
//! 모든 실패는 [`AppError`](crate::errors::AppError) 로 반환되어 상태 코드와
//! 필드 메시지 맵으로 변환됩니다.
//!
//! ```text
//! ┌─────────────────────┐
//! │  Handlers (이 모듈)   │ ← 검증, 응답 조립
//! ├─────────────────────┤
//! │  Services           │ ← 도메인 규칙
//! ├─────────────────────┤
//! │  Repositories       │ ← MongoDB / 메모리
//! └─────────────────────┘
//! ```
//!
//! 서비스 인스턴스는 [`AppContainer`](crate::core::AppContainer) 가 등록한
//! `web::Data` 로 주입됩니다. 보호된 라우트는 `wrap = "AuthMiddleware::required()"`
//! 를 달고 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 를 인자로 받습니다.

pub mod posts;
pub mod profiles;
pub mod users;
