// Route exports
pub mod auth;
pub mod health;
pub mod quiz;
pub mod summary;

use crate::services::{ModelGateway, VocabularySource};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
    pub vocabulary: Arc<dyn VocabularySource>,
    pub login_password: Option<Arc<str>>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(auth::configure)
        .configure(summary::configure)
        .configure(quiz::configure);
}
