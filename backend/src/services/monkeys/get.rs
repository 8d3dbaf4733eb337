use crate::api_error::ApiError;
use crate::store::MonkeyStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /monkeys/{monkey_id}`.
///
/// # Returns
/// - `200 OK` with the record.
/// - `404 Not Found` with `{"error": "Monkey not found"}` for an unknown id.
pub async fn process(
    store: web::Data<MonkeyStore>,
    monkey_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let monkey = store.get(&monkey_id)?;
    Ok(HttpResponse::Ok().json(monkey))
}
