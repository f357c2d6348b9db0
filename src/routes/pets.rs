use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::CreatePetRequest;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/pets", web::get().to(list_pets))
        .route("/pets", web::post().to(create_pet));
}

/// GET /api/pets
async fn list_pets(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let pets = state.pets.list()?;
    Ok(HttpResponse::Ok().json(pets))
}

/// Add a pet to the catalog
///
/// POST /api/pets
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 3,
///   "tags": ["string"],
///   "story": "string",
///   "photo": "string"
/// }
/// ```
async fn create_pet(
    state: web::Data<AppState>,
    req: web::Json<CreatePetRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_pet request: {:?}", errors);
        return Err(errors.into());
    }

    let pet = state.pets.create(req.into_inner().into()).map_err(|e| {
        tracing::error!("Failed to add pet: {}", e);
        e
    })?;

    tracing::info!("Created pet {} ({})", pet.id, pet.name);
    Ok(HttpResponse::Created().json(pet))
}
