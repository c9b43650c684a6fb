use serde::{Deserialize, Serialize};

/// Response for the summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_word: Option<String>,
}

/// Response for a successful password check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// Liveness message served at the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
///
/// `detail` carries the human-readable message the browser client displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    pub status_code: u16,
}
