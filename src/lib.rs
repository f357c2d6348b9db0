//! Adoptly - pet catalog, adoption story feed and lifestyle quiz matching
//!
//! The core of the crate is the quiz [`Matcher`], a pure function that ranks
//! adoptable pets against a user's lifestyle answers. The HTTP layer and the
//! in-memory catalog stores around it are thin collaborators.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, rank, calculate_match_score};
pub use crate::models::{Pet, Story, QuizAnswers, MatchResponse};

use crate::config::Settings;
use crate::routes::AppState;
use crate::services::{InMemoryPetStore, InMemoryStoryStore};

/// Build handler state from settings, using in-memory stores
pub fn build_state(settings: &Settings) -> AppState {
    let (pets, stories) = if settings.catalog.seed_demo_data {
        (InMemoryPetStore::with_demo_data(), InMemoryStoryStore::with_demo_data())
    } else {
        (InMemoryPetStore::default(), InMemoryStoryStore::default())
    };

    AppState {
        pets: Arc::new(pets),
        stories: Arc::new(stories),
        matcher: Matcher::new(settings.matching.default_limit),
    }
}
