use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `users` 컬렉션 문서
///
/// `password` 에는 bcrypt 해시만 저장됩니다. 생성 이후 어떤 라우트도
/// 문서를 제자리에서 수정하지 않으며, 계정 삭제 시 프로필과 함께 지워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// 유니크 인덱스 대상
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub date: DateTime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password: password_hash,
            avatar,
            date: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
