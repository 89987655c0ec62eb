use std::cmp::Reverse;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::PostRepository;
use crate::domain::entities::posts::post::Post;
use crate::errors::AppResult;
use crate::repositories::{read_lock, write_lock};

#[derive(Default)]
pub struct MemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let mut posts = read_lock(&self.posts).clone();
        posts.sort_by_key(|post| Reverse((post.date, post.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        Ok(read_lock(&self.posts).iter().find(|post| post.id == *id).cloned())
    }

    async fn create(&self, post: Post) -> AppResult<Post> {
        write_lock(&self.posts).push(post.clone());
        Ok(post)
    }

    async fn save_engagement(&self, post: &Post) -> AppResult<()> {
        let mut posts = write_lock(&self.posts);

        if let Some(stored) = posts.iter_mut().find(|stored| stored.id == post.id) {
            stored.likes = post.likes.clone();
            stored.comments = post.comments.clone();
        }

        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut posts = write_lock(&self.posts);
        let before = posts.len();
        posts.retain(|post| post.id != *id);
        Ok(posts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> Post {
        Post::new(ObjectId::new(), text.to_string(), None, None)
    }

    #[actix_web::test]
    async fn test_find_all_is_newest_first() {
        let repo = MemoryPostRepository::new();
        let older = repo.create(post("first post body")).await.unwrap();
        let newer = repo.create(post("second post body")).await.unwrap();

        let ids: Vec<ObjectId> = repo.find_all().await.unwrap().into_iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[actix_web::test]
    async fn test_save_engagement_persists_likes() {
        let repo = MemoryPostRepository::new();
        let mut stored = repo.create(post("a post to like")).await.unwrap();

        stored.add_like(ObjectId::new());
        stored.text = "edited locally".into();
        repo.save_engagement(&stored).await.unwrap();

        let reloaded = repo.find_by_id(&stored.id).await.unwrap().unwrap();
        assert_eq!(reloaded.likes.len(), 1);
        assert_eq!(reloaded.text, "a post to like");
    }
}
