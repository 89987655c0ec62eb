//! 비즈니스 로직 계층
//!
//! 서비스는 생성 시 리포지토리와 자격 증명 서비스를 주입받습니다.
//! 각 요청 안에서 존재 확인 → 변경 → 저장 순서로 순차 실행되며,
//! 트랜잭션이나 잠금은 사용하지 않습니다.

pub mod auth;
pub mod posts;
pub mod profiles;
pub mod users;

use mongodb::bson::oid::ObjectId;

pub use posts::PostService;
pub use profiles::ProfileService;
pub use users::UserService;

/// 경로 파라미터를 식별자로 해석합니다. 형식이 틀리면 `None`.
pub(crate) fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw.trim()).ok()
}
