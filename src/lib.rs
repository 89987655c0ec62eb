//! 개발자 커뮤니티 백엔드
//!
//! 개발자들이 계정을 만들고 프로필(경력, 학력, 소셜 링크)을 관리하며
//! 게시물에 좋아요와 댓글을 남기는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **계정**: 가입, 로그인, Bearer JWT 발급, 현재 사용자 조회
//! - **프로필**: 사용자당 하나, 핸들 기반 공개 조회, 경력/학력 항목
//! - **게시물**: 최신순 목록, 사용자당 한 번의 좋아요, 댓글
//! - **저장소**: MongoDB (개발/테스트용 메모리 구현 포함)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/users, /api/profile, /api/posts
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Auth Middleware │ ← Bearer 토큰 → AuthenticatedUser
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 검증, 응답 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 도메인 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use dev_connector_backend::core::AppContainer;
//! use dev_connector_backend::routes::configure_all_routes;
//!
//! let container = AppContainer::with_mongo(&database).await?;
//! let app = App::new()
//!     .configure(|cfg| container.register(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
