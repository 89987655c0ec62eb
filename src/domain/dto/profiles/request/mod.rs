pub mod entry_request;
pub mod profile_request;

pub use entry_request::{EducationRequest, ExperienceRequest};
pub use profile_request::ProfileRequest;
