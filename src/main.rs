use actix_web::{middleware, web, App, HttpServer};
use historybytes::config::Settings;
use historybytes::error::handle_json_payload_error;
use historybytes::middleware::{cors_policy, security_headers};
use historybytes::routes::{self, AppState};
use historybytes::services::{AirtableClient, GeminiClient};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting HistoryBytes summary service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!("Configuration loaded successfully");

    if settings.gemini.api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set; model calls will fail");
    }
    if settings.auth.secret().is_none() {
        warn!("LOGIN_PASSWORD is not set; /authenticate will return 500");
    }

    let gemini = GeminiClient::new(&settings.gemini).map_err(|e| {
        error!("Failed to create Gemini client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    info!("Gemini client initialized (model: {})", settings.gemini.model);

    let airtable = AirtableClient::new(&settings.airtable).map_err(|e| {
        error!("Failed to create Airtable client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    if airtable.is_configured() {
        info!("Airtable client initialized (table: {})", settings.airtable.table);
    } else {
        warn!("Airtable credentials missing, summaries will not include vocabulary words");
    }

    // Build application state
    let app_state = AppState {
        gateway: Arc::new(gemini),
        vocabulary: Arc::new(airtable),
        login_password: settings.auth.secret().map(Arc::from),
    };

    let cors_settings = settings.cors.clone();

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors_policy(&cors_settings))
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
