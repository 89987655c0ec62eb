//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`gravatar`] - 이메일 기반 아바타 URL
//! - [`string_utils`] - 요청 본문 문자열 정규화, 쉼표 목록 분리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::gravatar::gravatar_url;
//! use crate::utils::string_utils::split_comma_list;
//!
//! let avatar = gravatar_url("a@a.com");
//! let skills = split_comma_list("rust,go");
//! ```

pub mod gravatar;
pub mod string_utils;
