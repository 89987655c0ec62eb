pub mod post_response;

pub use post_response::{CommentResponse, LikeResponse, PostResponse};
