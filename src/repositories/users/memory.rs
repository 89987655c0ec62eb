use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::UserRepository;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::repositories::{read_lock, write_lock};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(read_lock(&self.users)
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(read_lock(&self.users).get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        let users = read_lock(&self.users);
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    /// 이메일 중복은 쓰기 잠금 안에서 확인하므로 동시 가입도 하나만 성공합니다.
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = write_lock(&self.users);

        if users.values().any(|stored| stored.email == user.email) {
            return Err(AppError::ConflictError(FieldErrors::single(
                "email",
                "Email Already Exists!",
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(write_lock(&self.users).remove(id).is_some())
    }
}

#[cfg(test)]
impl MemoryUserRepository {
    pub(crate) fn count_with_email(&self, email: &str) -> usize {
        read_lock(&self.users)
            .values()
            .filter(|user| user.email == email)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_find_delete() {
        let repo = MemoryUserRepository::new();
        let user = User::new("Al".into(), "a@a.com".into(), "hash".into(), "//avatar".into());
        let id = user.id;

        repo.create(user).await.unwrap();

        assert!(repo.find_by_email("a@a.com").await.unwrap().is_some());
        assert!(repo.find_by_email("b@a.com").await.unwrap().is_none());
        assert_eq!(repo.find_by_ids(&[id, ObjectId::new()]).await.unwrap().len(), 1);

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MemoryUserRepository::new();
        repo.create(User::new("Al".into(), "a@a.com".into(), "hash".into(), "//avatar".into()))
            .await
            .unwrap();

        let second = repo
            .create(User::new("Al2".into(), "a@a.com".into(), "hash".into(), "//avatar".into()))
            .await;

        assert!(matches!(second, Err(AppError::ConflictError(ref e)) if e.get("email") == Some("Email Already Exists!")));
        assert_eq!(repo.count_with_email("a@a.com"), 1);
    }
}
