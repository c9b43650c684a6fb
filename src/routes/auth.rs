use super::AppState;
use crate::error::ApiError;
use crate::models::{AuthRequest, AuthResponse};
use actix_web::{web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/authenticate", web::post().to(authenticate));
}

/// Password check
///
/// POST /authenticate
///
/// The supplied password must equal the configured one exactly: no trimming,
/// case-sensitive. An empty configured password is treated as missing.
async fn authenticate(
    state: web::Data<AppState>,
    req: web::Json<AuthRequest>,
) -> Result<HttpResponse, ApiError> {
    let expected = state
        .login_password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            tracing::error!("Login password is not configured");
            ApiError::Configuration
        })?;

    if req.password != expected {
        tracing::info!("Rejected authentication attempt");
        return Err(ApiError::Unauthorized);
    }

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Authentication successful".to_string(),
    }))
}
