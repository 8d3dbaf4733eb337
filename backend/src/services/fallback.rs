use crate::api_error::ApiError;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse};

/// Catch-all for requests no route claimed.
///
/// `OPTIONS` is a CORS pre-flight and gets an empty `200`; the CORS headers
/// themselves come from `cors::default_headers`. Everything else is a `404` that
/// names the requested path.
pub async fn process(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if *req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    Err(ApiError::route_not_found(req.path()))
}
