use crate::models::{HealthResponse, RootResponse};
use actix_web::{web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Liveness message
async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Historical Summary Agent API is running!".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
