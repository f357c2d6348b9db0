use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{MatchResponse, QuizAnswers};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(find_matches));
}

/// Quiz match endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "livingSpace": "apartment|house-small|house-large",
///   "activityLevel": "low|medium|high",
///   "experience": "first-time|some|experienced",
///   "timeAvailable": "limited|moderate|lots",
///   "hasKids": true
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let answers = QuizAnswers::from_value(body.into_inner()).map_err(|e| {
        tracing::info!("Rejected quiz answers: {}", e);
        e
    })?;

    tracing::debug!("Quiz answers: {:?}", answers);

    let candidates = state.pets.list().map_err(|e| {
        tracing::error!("Failed to list pets for matching: {}", e);
        e
    })?;

    let matches = state.matcher.find_matches(&answers, &candidates);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        matches.len(),
        candidates.len()
    );

    Ok(HttpResponse::Ok().json(MatchResponse { matches }))
}
