pub mod profile_response;

pub use profile_response::{EducationResponse, ExperienceResponse, ProfileOwner, ProfileResponse, UserSummary};
