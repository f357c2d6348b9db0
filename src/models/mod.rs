// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Pet, Story, QuizAnswers, LivingSpace, ActivityLevel, Experience, TimeAvailable};
pub use requests::{CreatePetRequest, CreateStoryRequest};
pub use responses::{MatchResponse, HealthResponse, ErrorResponse};
