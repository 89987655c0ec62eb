use serde::{Deserialize, Serialize};

/// 게시물 작성과 댓글 작성에 공통으로 쓰이는 본문
///
/// `name`, `avatar` 는 클라이언트가 보낸 값을 그대로 저장합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    pub text: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}
