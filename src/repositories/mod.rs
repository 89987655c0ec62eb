//! 데이터 액세스 계층
//!
//! 컬렉션마다 `async_trait` 리포지토리 trait 하나와 두 가지 구현을 둡니다.
//!
//! - `*_repo.rs` - MongoDB 컬렉션 구현
//! - `memory.rs` - 프로세스 메모리 구현 (개발/테스트)
//!
//! 서비스는 `Arc<dyn ...Repository>` 만 알고 있으므로 어느 저장소든
//! 같은 동작을 합니다. 하위 문서 목록 변경은 바뀐 배열만 저장합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, MongoUserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_email("a@a.com").await?;
//! ```

pub mod posts;
pub mod profiles;
pub mod users;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mongodb::error::{ErrorKind, WriteFailure};

pub use posts::{MemoryPostRepository, MongoPostRepository, PostRepository};
pub use profiles::{MemoryProfileRepository, MongoProfileRepository, ProfileRepository, ProfileUpdate};
pub use users::{MemoryUserRepository, MongoUserRepository, UserRepository};

/// 패닉으로 오염된 잠금도 마지막 상태 그대로 이어서 사용합니다.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// 유니크 인덱스 위반 (E11000)
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
