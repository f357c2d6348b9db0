// Route exports
pub mod health;
pub mod matches;
pub mod pets;
pub mod stories;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::{PetRepository, StoryRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pets: Arc<dyn PetRepository>,
    pub stories: Arc<dyn StoryRepository>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(matches::configure)
            .configure(pets::configure)
            .configure(stories::configure),
    );
}
