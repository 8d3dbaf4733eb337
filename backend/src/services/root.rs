use actix_web::web::{get, resource, to};
use actix_web::{HttpResponse, Resource};
use common::responses::MessageResponse;

use crate::services::fallback;

/// `GET /`: liveness probe.
pub fn configure_routes() -> Resource {
    resource("/")
        .route(get().to(process))
        .default_service(to(fallback::process))
}

async fn process() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Monkey Registry API"))
}
