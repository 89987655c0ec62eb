use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::to_chrono;
use crate::domain::entities::posts::post::{Comment, Like, Post};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id.to_hex(),
            user: like.user.to_hex(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            user: comment.user.to_hex(),
            text: comment.text,
            name: comment.name,
            avatar: comment.avatar,
            date: to_chrono(comment.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            user: post.user.to_hex(),
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes.into_iter().map(LikeResponse::from).collect(),
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            date: to_chrono(post.date),
        }
    }
}
