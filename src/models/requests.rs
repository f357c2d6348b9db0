use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to add a pet to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePetRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Request to publish a story to the community feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub photo: Option<String>,
}
