use crate::api_error::ApiError;
use crate::store::MonkeyStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /monkeys`.
///
/// Returns every record ordered by `created_at`, newest first. An empty registry
/// yields an empty array.
pub async fn process(store: web::Data<MonkeyStore>) -> Result<HttpResponse, ApiError> {
    let monkeys = store.list_all()?;
    Ok(HttpResponse::Ok().json(monkeys))
}
