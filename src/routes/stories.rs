use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::CreateStoryRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/stories", web::get().to(list_stories))
        .route("/stories", web::post().to(create_story));
}

/// Community feed, newest first
///
/// GET /api/stories
async fn list_stories(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stories = state.stories.list()?;
    Ok(HttpResponse::Ok().json(stories))
}

/// Publish a story
///
/// POST /api/stories
///
/// Request body:
/// ```json
/// {
///   "author": "string",
///   "content": "string",
///   "photo": "string"
/// }
/// ```
async fn create_story(
    state: web::Data<AppState>,
    req: web::Json<CreateStoryRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_story request: {:?}", errors);
        return Err(errors.into());
    }

    let story = state.stories.create(req.into_inner().into()).map_err(|e| {
        tracing::error!("Failed to publish story: {}", e);
        e
    })?;

    tracing::info!("Published story {} by {}", story.id, story.author);
    Ok(HttpResponse::Created().json(story))
}
