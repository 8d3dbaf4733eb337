//! HTTP surface of the registry.
//!
//! `configure` registers every route on an Actix `App`. The same routing table is
//! used by `main.rs` and by the handler tests.

pub mod descriptions;
pub mod fallback;
pub mod monkeys;
mod root;


use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::configure_routes())
        .service(monkeys::configure_routes())
        .service(descriptions::configure_routes())
        .default_service(web::to(fallback::process));
}
