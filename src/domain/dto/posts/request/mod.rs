pub mod post_request;

pub use post_request::PostRequest;
