use crate::api_error::ApiError;
use crate::store::MonkeyStore;
use actix_web::{web, HttpResponse};
use common::responses::MessageResponse;
use log::info;

/// Actix web handler for `DELETE /monkeys/{monkey_id}`. Hard delete, nothing is
/// kept behind.
pub async fn process(
    store: web::Data<MonkeyStore>,
    monkey_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    store.delete(&monkey_id)?;
    info!("Deleted monkey {}", monkey_id.as_str());
    Ok(HttpResponse::Ok().json(MessageResponse::new("Monkey deleted successfully")))
}
