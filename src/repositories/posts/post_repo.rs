use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::PostRepository;
use crate::db::Database;
use crate::domain::entities::posts::post::Post;
use crate::errors::{AppError, AppResult, ErrorContext};

const COLLECTION: &str = "posts";

pub struct MongoPostRepository {
    collection: Collection<Post>,
}

impl MongoPostRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Post>(COLLECTION),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn find_all(&self) -> AppResult<Vec<Post>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1, "_id": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Post>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, post: Post) -> AppResult<Post> {
        self.collection
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn save_engagement(&self, post: &Post) -> AppResult<()> {
        let likes = mongodb::bson::to_bson(&post.likes).context("likes 직렬화 실패")?;
        let comments = mongodb::bson::to_bson(&post.comments).context("comments 직렬화 실패")?;

        self.collection
            .update_one(
                doc! { "_id": post.id },
                doc! { "$set": { "likes": likes, "comments": comments } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let date_index = IndexModel::builder()
            .keys(doc! { "date": -1 })
            .options(
                IndexOptions::builder()
                    .name("date_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
