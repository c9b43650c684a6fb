use crate::config::CorsSettings;
use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;

/// Allow-list CORS policy
///
/// Matching origins are echoed back with credentials allowed; every method
/// and header is accepted. No wildcard origin is ever emitted.
pub fn cors_policy(settings: &CorsSettings) -> Cors {
    let allowed = settings.allowed_origins.clone();

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            allowed.iter().any(|o| o.as_bytes() == origin.as_bytes())
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

/// Fixed security headers added to every response
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("X-XSS-Protection", "1; mode=block"))
}
