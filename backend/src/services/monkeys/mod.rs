//! # Monkey Service Module
//!
//! CRUD endpoints for monkey records under `/monkeys`. Each sub-module holds one
//! handler; validation lives in `validation` and is shared by create and update.
//!
//! ## Sub-modules:
//! - `list`: every record, newest first.
//! - `create`: validates a payload, mints an id and stores the record.
//! - `get`: one record by id.
//! - `update`: replaces all fields of an existing record.
//! - `delete`: removes a record.
//! - `validation`: the field contract.

mod create;
mod delete;
mod get;
mod list;
mod update;
pub mod validation;

use crate::services::fallback;
use actix_web::web::{delete, get, post, put, resource, scope, to};
use actix_web::Scope;

/// The base path for all monkey endpoints.
const API_PATH: &str = "/monkeys";

/// Configures and returns the Actix `Scope` for the monkey routes.
///
/// # Registered Routes:
///
/// *   **`GET /monkeys`** → `list::process`: `200` with a JSON array of records.
/// *   **`POST /monkeys`** → `create::process`: `201` with the stored record, or `400`
///     with an `errors` map.
/// *   **`GET /monkeys/{monkey_id}`** → `get::process`: `200` or `404`.
/// *   **`PUT /monkeys/{monkey_id}`** → `update::process`: `200` with the updated
///     record, `404` if the id is unknown (checked first), `400` on invalid fields.
/// *   **`DELETE /monkeys/{monkey_id}`** → `delete::process`: `200` with a
///     confirmation message, or `404`.
///
/// Any other method on these paths goes to `fallback::process`, which answers
/// pre-flight requests and turns the rest into a `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .route(post().to(create::process))
                .default_service(to(fallback::process)),
        )
        .service(
            resource("/{monkey_id}")
                .route(get().to(get::process))
                .route(put().to(update::process))
                .route(delete().to(delete::process))
                .default_service(to(fallback::process)),
        )
}
