// Service exports
pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::{InMemoryPetStore, InMemoryStoryStore};
pub use repository::{NewPet, NewStory, PetRepository, RepositoryError, StoryRepository};
pub use seed::{demo_pets, demo_stories};
