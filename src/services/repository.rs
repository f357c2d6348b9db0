use thiserror::Error;

use crate::models::{CreatePetRequest, CreateStoryRequest, Pet, Story};

/// Errors that can occur when reading or writing a catalog store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),

    #[error("Catalog full: no id left for a new {0}")]
    Exhausted(&'static str),
}

/// Fields of a pet before the store assigns it an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub age: u8,
    pub tags: Vec<String>,
    pub story: String,
    pub photo: Option<String>,
}

impl From<CreatePetRequest> for NewPet {
    fn from(req: CreatePetRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            tags: req.tags,
            story: req.story,
            photo: req.photo,
        }
    }
}

/// Fields of a story before the store assigns it an id and date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStory {
    pub author: String,
    pub content: String,
    pub photo: Option<String>,
}

impl From<CreateStoryRequest> for NewStory {
    fn from(req: CreateStoryRequest) -> Self {
        Self {
            author: req.author,
            content: req.content,
            photo: req.photo,
        }
    }
}

/// Pet catalog capability handed to request handlers
pub trait PetRepository: Send + Sync {
    /// All pets in catalog order
    fn list(&self) -> Result<Vec<Pet>, RepositoryError>;

    /// Append a pet, assigning the next id
    fn create(&self, pet: NewPet) -> Result<Pet, RepositoryError>;
}

/// Story feed capability handed to request handlers
pub trait StoryRepository: Send + Sync {
    /// All stories, newest first
    fn list(&self) -> Result<Vec<Story>, RepositoryError>;

    /// Publish a story dated today
    fn create(&self, story: NewStory) -> Result<Story, RepositoryError>;
}
