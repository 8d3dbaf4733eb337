//! `POST /monkeys`: validates the payload, assigns an id and timestamps, and stores
//! the new record.

use crate::api_error::ApiError;
use crate::services::monkeys::validation;
use crate::store::MonkeyStore;
use crate::timestamp;
use actix_web::{web, HttpResponse};
use common::model::monkey::Monkey;
use log::info;
use serde_json::Value;
use uuid::Uuid;

/// Actix web handler for `POST /monkeys`.
///
/// # Returns
/// - `201 Created` with the stored record.
/// - `400 Bad Request` with every failing field listed under `errors`.
pub async fn process(
    store: web::Data<MonkeyStore>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let monkey = create_monkey(&store, &payload)?;
    Ok(HttpResponse::Created().json(monkey))
}

fn create_monkey(store: &MonkeyStore, payload: &Value) -> Result<Monkey, ApiError> {
    let fields = validation::validate(payload)?;
    let monkey = fields.into_record(Uuid::new_v4().to_string(), timestamp::now());
    store.insert(&monkey)?;
    info!("Created monkey {} ({})", monkey.monkey_id, monkey.name);
    Ok(monkey)
}
