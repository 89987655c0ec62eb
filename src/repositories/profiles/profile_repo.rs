use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};

use super::{duplicate_handle, duplicate_owner, ProfileRepository, ProfileUpdate};
use crate::db::Database;
use crate::domain::entities::profiles::profile::Profile;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::is_duplicate_key;

const COLLECTION: &str = "profiles";

pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Profile>(COLLECTION),
        }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_user(&self, user: &ObjectId) -> AppResult<Option<Profile>> {
        self.collection
            .find_one(doc! { "user": *user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_handle(&self, handle: &str) -> AppResult<Option<Profile>> {
        self.collection
            .find_one(doc! { "handle": handle })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Profile>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        self.collection
            .insert_one(&profile)
            .await
            .map_err(map_write_error)?;

        Ok(profile)
    }

    async fn update_fields(&self, user: &ObjectId, update: &ProfileUpdate) -> AppResult<Option<Profile>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "user": *user }, update.to_set_document()?)
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    async fn save_entries(&self, profile: &Profile) -> AppResult<()> {
        let experience = mongodb::bson::to_bson(&profile.experience).context("experience 직렬화 실패")?;
        let education = mongodb::bson::to_bson(&profile.education).context("education 직렬화 실패")?;

        self.collection
            .update_one(
                doc! { "_id": profile.id },
                doc! { "$set": { "experience": experience, "education": education } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_user(&self, user: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "user": *user })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_unique".to_string())
                    .build(),
            )
            .build();

        let handle_index = IndexModel::builder()
            .keys(doc! { "handle": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("handle_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([user_index, handle_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 유니크 인덱스 위반은 어느 인덱스인지에 따라 충돌 메시지로 바꿉니다.
fn map_write_error(err: mongodb::error::Error) -> AppError {
    if !is_duplicate_key(&err) {
        return AppError::DatabaseError(err.to_string());
    }
    if err.to_string().contains("user_unique") {
        duplicate_owner()
    } else {
        duplicate_handle()
    }
}
