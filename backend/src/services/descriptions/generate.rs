use crate::api_error::ApiError;
use crate::services::descriptions::template::{self, DescriptionInput};
use crate::timestamp;
use actix_web::{web, HttpResponse};
use common::model::description::DescriptionResponse;
use serde_json::Value;

const SPECIES_REQUIRED: &str = "Species is required for description generation";

/// Actix web handler for `POST /generate-description`.
///
/// Accepts `{name?, species, age_years?, favourite_fruit?, last_checkup_at?}`.
///
/// # Returns
/// - `200 OK` with `{description, generated_at, species, monkey_name?}`.
/// - `400 Bad Request` when `species` is missing or empty.
pub async fn process(payload: web::Json<Value>) -> Result<HttpResponse, ApiError> {
    let input = DescriptionInput::from_json(&payload)
        .ok_or_else(|| ApiError::bad_request(SPECIES_REQUIRED))?;
    let description = template::generate(&input);

    Ok(HttpResponse::Ok().json(DescriptionResponse {
        description,
        generated_at: timestamp::now(),
        species: input.species,
        monkey_name: input.name,
    }))
}
