//! # Description Service Module
//!
//! `POST /generate-description` builds a canned, template-based description of a
//! monkey. The text is produced in-process by `template::generate`; no model or
//! network call is involved and identical input always yields identical text.
//! The generated text is returned to the caller and never stored here; clients
//! save it with `PUT /monkeys/{monkey_id}`.

mod generate;
pub mod template;

use crate::services::fallback;
use actix_web::web::{post, resource, to};
use actix_web::Resource;

const API_PATH: &str = "/generate-description";

pub fn configure_routes() -> Resource {
    resource(API_PATH)
        .route(post().to(generate::process))
        .default_service(to(fallback::process))
}
