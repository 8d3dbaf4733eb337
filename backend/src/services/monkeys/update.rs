//! `PUT /monkeys/{monkey_id}`: replaces every field of an existing record.
//!
//! Partial updates are not supported; the payload must pass the same validation as a
//! create. `description` is overwritten wholesale, so omitting it clears it. This is
//! also how a generated description gets saved.

use crate::api_error::{ApiError, MONKEY_NOT_FOUND};
use crate::services::monkeys::validation;
use crate::store::MonkeyStore;
use crate::timestamp;
use actix_web::{web, HttpResponse};
use common::model::monkey::Monkey;
use serde_json::Value;

/// Actix web handler for `PUT /monkeys/{monkey_id}`.
///
/// # Returns
/// - `200 OK` with the record as stored after the update.
/// - `404 Not Found` when the id is unknown. Existence is checked before the payload.
/// - `400 Bad Request` with an `errors` map when the payload is invalid.
pub async fn process(
    store: web::Data<MonkeyStore>,
    monkey_id: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let monkey = update_monkey(&store, &monkey_id, &payload)?;
    Ok(HttpResponse::Ok().json(monkey))
}

fn update_monkey(
    store: &MonkeyStore,
    monkey_id: &str,
    payload: &Value,
) -> Result<Monkey, ApiError> {
    if !store.exists(monkey_id)? {
        return Err(ApiError::NotFound(MONKEY_NOT_FOUND.to_string()));
    }
    let fields = validation::validate(payload)?;
    Ok(store.update(monkey_id, &fields, &timestamp::now())?)
}
