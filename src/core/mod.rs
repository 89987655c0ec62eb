//! # Core
//!
//! 애플리케이션 조립 지점입니다. [`container::AppContainer`] 가 저장소 구현을
//! 골라 서비스 그래프를 만들고, actix 앱 데이터로 등록합니다.
//!
//! ```rust,ignore
//! let container = AppContainer::with_mongo(&database).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| container.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::AppContainer;
