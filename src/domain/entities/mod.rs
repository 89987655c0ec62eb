//! 영속 엔티티
//!
//! 컬렉션 하나당 하위 모듈 하나. 하위 문서(경력, 학력, 좋아요, 댓글)는
//! 부모 문서에 내장되며 부모와 생명주기를 같이 합니다.

pub mod posts;
pub mod profiles;
pub mod users;
