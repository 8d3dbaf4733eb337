//! Cross-origin headers attached to every response.
//!
//! The registry is called straight from a browser client on another origin, so all
//! responses, errors included, carry a permissive set of CORS headers. Pre-flight
//! `OPTIONS` requests are answered by `services::fallback`.

use actix_web::http::header::{self, HeaderValue};
use actix_web::middleware::DefaultHeaders;

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

pub fn default_headers(allow_origin: HeaderValue) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"))
}
