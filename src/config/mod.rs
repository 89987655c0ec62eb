//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한 곳에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 비밀번호 해싱 설정
//! - [`auth_config`] - 베어러 토큰 서명 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="devconnector"
//! export STORAGE_BACKEND="mongodb"     # mongodb | memory
//! export JWT_SECRET="your-secret"
//! export JWT_EXPIRATION_SECONDS="3600"
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export BCRYPT_COST="10"              # 4-15 범위
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::JwtConfig;
pub use data_config::{DatabaseConfig, Environment, PasswordConfig, ServerConfig, StorageBackend};
