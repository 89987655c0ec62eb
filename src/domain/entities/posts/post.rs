//! `posts` 컬렉션 문서
//!
//! 좋아요와 댓글은 게시물 안에 내장되며 가장 최근 것이 맨 앞입니다.
//! 한 사용자는 같은 게시물에 좋아요를 최대 한 번만 남길 수 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date: DateTime,
}

impl Comment {
    pub fn new(user: ObjectId, text: String, name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            text,
            name,
            avatar,
            date: DateTime::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub text: String,
    /// 작성 시점 요청 본문의 표시 이름 스냅샷
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime,
}

impl Post {
    pub fn new(user: ObjectId, text: String, name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: DateTime::now(),
        }
    }

    pub fn is_authored_by(&self, user: &ObjectId) -> bool {
        self.user == *user
    }

    pub fn has_liked(&self, user: &ObjectId) -> bool {
        self.likes.iter().any(|like| like.user == *user)
    }

    /// 아직 좋아요하지 않은 사용자라면 맨 앞에 추가하고 `true` 를 돌려줍니다.
    pub fn add_like(&mut self, user: ObjectId) -> bool {
        if self.has_liked(&user) {
            return false;
        }
        self.likes.insert(0, Like { id: ObjectId::new(), user });
        true
    }

    pub fn remove_like(&mut self, user: &ObjectId) -> Option<Like> {
        let index = self.likes.iter().position(|like| like.user == *user)?;
        Some(self.likes.remove(index))
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// 요청자가 이 게시물에 남긴 댓글이 하나라도 있는지
    pub fn has_comment_by(&self, user: &ObjectId) -> bool {
        self.comments.iter().any(|comment| comment.user == *user)
    }

    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id.to_hex() == comment_id)?;
        Some(self.comments.remove(index))
    }
}
