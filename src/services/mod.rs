//! External collaborators: the generative model and the vocabulary store.
//!
//! Handlers depend on the traits below so that tests can swap the HTTP
//! clients for in-process fakes.

pub mod airtable;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use airtable::{AirtableClient, AirtableError};
pub use gemini::GeminiClient;

/// Errors that can occur when calling the generative model
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Model API key is not configured")]
    NotConfigured,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Text generation backend
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate a reply for `prompt`, trimmed of surrounding whitespace
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Source of age-appropriate vocabulary words
#[async_trait]
pub trait VocabularySource: Send + Sync {
    /// Pick one word for `age_group`, or `None` when nothing is available
    ///
    /// Implementations absorb their own failures.
    async fn lookup(&self, age_group: &str) -> Option<String>;
}
