use std::sync::RwLock;

use chrono::{NaiveDate, Utc};

use crate::models::{Pet, Story};
use crate::services::repository::{
    NewPet, NewStory, PetRepository, RepositoryError, StoryRepository,
};
use crate::services::seed::{demo_pets, demo_stories};

fn next_id(len: usize, kind: &'static str) -> Result<u32, RepositoryError> {
    len.checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(RepositoryError::Exhausted(kind))
}

/// Process-local pet catalog
///
/// Nothing is persisted; the catalog lives as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetStore {
    pub fn new(pets: Vec<Pet>) -> Self {
        Self { pets: RwLock::new(pets) }
    }

    /// Store pre-filled with the reference pets
    pub fn with_demo_data() -> Self {
        Self::new(demo_pets())
    }
}

impl PetRepository for InMemoryPetStore {
    fn list(&self) -> Result<Vec<Pet>, RepositoryError> {
        let pets = self
            .pets
            .read()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;
        Ok(pets.clone())
    }

    fn create(&self, new_pet: NewPet) -> Result<Pet, RepositoryError> {
        let mut pets = self
            .pets
            .write()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;

        let pet = Pet {
            id: next_id(pets.len(), "pet")?,
            name: new_pet.name,
            age: new_pet.age,
            tags: new_pet.tags,
            story: new_pet.story,
            photo: new_pet.photo,
        };
        pets.push(pet.clone());

        tracing::debug!("Added pet {} ({}) to catalog", pet.id, pet.name);
        Ok(pet)
    }
}

/// Process-local story feed, newest entries kept at the front
#[derive(Debug, Default)]
pub struct InMemoryStoryStore {
    stories: RwLock<Vec<Story>>,
}

impl InMemoryStoryStore {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories: RwLock::new(stories) }
    }

    /// Store pre-filled with the reference stories
    pub fn with_demo_data() -> Self {
        Self::new(demo_stories())
    }

    fn insert(&self, new_story: NewStory, timestamp: NaiveDate) -> Result<Story, RepositoryError> {
        let mut stories = self
            .stories
            .write()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?;

        let story = Story {
            id: next_id(stories.len(), "story")?,
            author: new_story.author,
            content: new_story.content,
            photo: new_story.photo,
            timestamp,
        };
        stories.insert(0, story.clone());

        tracing::debug!("Published story {} by {}", story.id, story.author);
        Ok(story)
    }
}

impl StoryRepository for InMemoryStoryStore {
    fn list(&self) -> Result<Vec<Story>, RepositoryError> {
        let mut stories = self
            .stories
            .read()
            .map_err(|e| RepositoryError::Poisoned(e.to_string()))?
            .clone();

        // Stable, so same-day stories stay newest insert first
        stories.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(stories)
    }

    fn create(&self, story: NewStory) -> Result<Story, RepositoryError> {
        self.insert(story, Utc::now().date_naive())
    }
}
